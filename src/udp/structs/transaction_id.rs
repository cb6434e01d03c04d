use rand::RngExt;

/// Client-chosen 32-bit id correlating a request with its response.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct TransactionId(pub i32);

impl TransactionId {
    pub fn generate() -> TransactionId {
        TransactionId(rand::rng().random())
    }
}
