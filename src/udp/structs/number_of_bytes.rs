/// A transfer counter field (downloaded, left or uploaded).
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct NumberOfBytes(pub i64);
