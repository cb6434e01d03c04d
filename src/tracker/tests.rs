#[cfg(test)]
mod tracker_tests {
    use std::str::FromStr;
    use crate::config::structs::tracker_entry_config::TrackerEntryConfig;
    use crate::tracker::enums::announce_event::AnnounceEvent;
    use crate::tracker::structs::info_hash::InfoHash;
    use crate::tracker::structs::peer_address::PeerAddress;
    use crate::tracker::structs::peer_id::PeerId;
    use crate::tracker::structs::tracker_catalog::TrackerCatalog;

    #[test]
    fn test_info_hash_hex_round_trip() {
        let hex = "0123456789abcdef0123456789abcdef01234567";
        let hash = InfoHash::from_str(hex).unwrap();
        assert_eq!(hash.to_string(), hex);
        assert_eq!(hash.0[0], 0x01);
        assert_eq!(hash.0[19], 0x67);
    }

    #[test]
    fn test_info_hash_uppercase_input() {
        let hash = InfoHash::from_str("ABCDEF0123456789ABCDEF0123456789ABCDEF01").unwrap();
        assert_eq!(hash.to_string(), "abcdef0123456789abcdef0123456789abcdef01");
    }

    #[test]
    fn test_info_hash_rejects_bad_input() {
        assert!(InfoHash::from_str("too short").is_err());
        assert!(InfoHash::from_str("zz23456789abcdef0123456789abcdef01234567").is_err());
        assert!(InfoHash::from_str("0123456789abcdef0123456789abcdef012345678").is_err());
    }

    #[test]
    fn test_peer_id_generate_keeps_prefix() {
        let peer_id = PeerId::generate("-SW0061-");
        assert_eq!(&peer_id.0[..8], b"-SW0061-");
        for byte in &peer_id.0[8..] {
            assert!(byte.is_ascii_digit());
        }
    }

    #[test]
    fn test_peer_id_generate_long_prefix_is_cut() {
        let peer_id = PeerId::generate("-VERYLONGPREFIXTHATDOESNOTFIT-");
        assert_eq!(&peer_id.0[..], &b"-VERYLONGPREFIXTHATDOESNOTFIT-"[..20]);
    }

    #[test]
    fn test_peer_address_from_record() {
        let peer = PeerAddress::from([127, 0, 0, 1, 0x1A, 0xE1]);
        assert_eq!(peer.to_string(), "127.0.0.1:6881");
    }

    #[test]
    fn test_announce_event_codes() {
        assert_eq!(AnnounceEvent::None.to_i32(), 0);
        assert_eq!(AnnounceEvent::Completed.to_i32(), 1);
        assert_eq!(AnnounceEvent::Started.to_i32(), 2);
        assert_eq!(AnnounceEvent::Stopped.to_i32(), 3);
        assert_eq!(AnnounceEvent::from_i32(2), AnnounceEvent::Started);
        assert_eq!(AnnounceEvent::from_i32(99), AnnounceEvent::None);
    }

    #[test]
    fn test_catalog_skips_unparsable_entries() {
        let entries = vec![
            TrackerEntryConfig {
                url: String::from("udp://tracker.example.org:1337"),
                max_peer_count: 200,
            },
            TrackerEntryConfig {
                url: String::from("not a url"),
                max_peer_count: 200,
            },
        ];
        let catalog = TrackerCatalog::from_config(&entries);
        assert_eq!(catalog.len(), 1);
        assert!(catalog.resolve("udp://tracker.example.org:1337").is_some());
        assert!(catalog.resolve("udp://other.example.org:1337").is_none());
    }
}
