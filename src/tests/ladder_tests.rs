    use super::*;

    fn promotion_path(from: Risk) -> Vec<Risk> {
        std::iter::successors(next(from), |r| next(*r)).collect()
    }

    #[test]
    fn stable_has_no_promotion_target() {
        assert_eq!(next(Risk::Stable), None);
    }

    #[test]
    fn each_risk_promotes_one_rung_toward_stable() {
        assert_eq!(next(Risk::Edge), Some(Risk::Beta));
        assert_eq!(next(Risk::Beta), Some(Risk::Candidate));
        assert_eq!(next(Risk::Candidate), Some(Risk::Stable));
    }

    #[test]
    fn edge_reaches_stable_only_through_beta_and_candidate() {
        assert_eq!(
            promotion_path(Risk::Edge),
            vec![Risk::Beta, Risk::Candidate, Risk::Stable]
        );
        assert!(promotion_path(Risk::Stable).is_empty());
    }

    #[test]
    fn ladder_order_matches_risk_ordering() {
        let mut sorted = RISKS;
        sorted.sort();
        assert_eq!(sorted, RISKS);
        assert!(Risk::Stable < Risk::Edge);
    }

    #[test]
    fn channel_target_keeps_track() {
        let ch: Channel = "2.0/beta".parse().expect("parse channel");
        assert_eq!(
            ch.promotion_target(),
            Some(Channel::new("2.0", Risk::Candidate))
        );
        assert_eq!(Channel::new("2.0", Risk::Stable).promotion_target(), None);
    }

    #[test]
    fn track_channels_are_in_ladder_order() {
        let names: Vec<String> = track_channels("latest")
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(
            names,
            vec!["latest/stable", "latest/candidate", "latest/beta", "latest/edge"]
        );
    }
