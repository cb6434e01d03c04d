#[cfg(test)]
mod store_tests {
    use crate::store::errors::StoreError;

    #[test]
    fn test_connection_error_display() {
        let error = StoreError::ConnectionError("failed to connect".to_string());
        assert_eq!(format!("{}", error), "Connection error: failed to connect");
    }

    #[test]
    fn test_error_debug() {
        let error = StoreError::ConnectionError("test".to_string());
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("ConnectionError"));
        assert!(debug_str.contains("test"));
    }
}
