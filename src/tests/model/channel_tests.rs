    use super::*;

    #[test]
    fn channel_round_trips_through_display() {
        let ch: Channel = "latest/candidate".parse().expect("parse channel");
        assert_eq!(ch, Channel::new("latest", Risk::Candidate));
        assert_eq!(ch.to_string(), "latest/candidate");
    }

    #[test]
    fn channel_track_may_contain_separators() {
        let ch: Channel = "team/2.0/edge".parse().expect("parse channel");
        assert_eq!(ch.track, "team/2.0");
        assert_eq!(ch.risk, Risk::Edge);
    }

    #[test]
    fn channel_parse_errors() {
        assert_eq!(
            "latest".parse::<Channel>(),
            Err(ParseChannelError::MissingSeparator("latest".to_string()))
        );
        assert_eq!(
            "/beta".parse::<Channel>(),
            Err(ParseChannelError::EmptyTrack("/beta".to_string()))
        );
        let err = "latest/nightly".parse::<Channel>().unwrap_err();
        assert!(err.to_string().contains("unknown risk `nightly`"), "{}", err);
    }

    #[test]
    fn channel_serializes_as_string_key() {
        let mut m = std::collections::BTreeMap::new();
        m.insert(Channel::new("latest", Risk::Stable), 1);
        let json = serde_json::to_string(&m).expect("serialize");
        assert_eq!(json, r#"{"latest/stable":1}"#);

        let back: std::collections::BTreeMap<Channel, u32> =
            serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, m);
    }

    #[test]
    fn risk_parses_only_ladder_names() {
        assert_eq!("beta".parse::<Risk>(), Ok(Risk::Beta));
        assert!("Beta".parse::<Risk>().is_err());
        assert_eq!(serde_json::to_string(&Risk::Edge).expect("serialize"), r#""edge""#);
    }
