/// A TCP/UDP port field.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Port(pub u16);
