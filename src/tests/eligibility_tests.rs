    use super::*;
    use crate::model::RevisionId;
    use crate::pending::PendingReleases;
    use crate::projection::project;

    fn r1() -> Revision {
        Revision::new(1, "1.0", ["amd64"])
    }

    fn beta_only() -> ReleaseMatrix {
        ReleaseMatrix::new().with(Channel::new("latest", Risk::Beta), "amd64", r1())
    }

    fn eval(
        current: &ReleaseMatrix,
        pending: &PendingReleases,
        enabled: bool,
        cell: &Cell,
    ) -> CellState {
        let next = project(current, pending);
        Evaluator::new(current, &next, enabled).evaluate(cell)
    }

    #[test]
    fn released_beta_cell_can_be_promoted() {
        let state = eval(
            &beta_only(),
            &PendingReleases::new(),
            true,
            &Cell::new("latest", Risk::Beta, "amd64"),
        );
        assert!(state.can_be_promoted);
        assert!(!state.has_pending_release);
        assert_eq!(state.displayed, Some(r1()));
        assert_eq!(state.target, Some(Channel::new("latest", Risk::Candidate)));
    }

    #[test]
    fn staged_target_shows_pending_release() {
        let pending =
            PendingReleases::new().promote(&r1(), Channel::new("latest", Risk::Candidate));
        let state = eval(
            &beta_only(),
            &pending,
            true,
            &Cell::new("latest", Risk::Candidate, "amd64"),
        );
        assert_eq!(state.displayed.as_ref().map(Revision::id), Some(RevisionId(1)));
        assert_eq!(state.previous, None);
        assert!(state.has_pending_release);
    }

    #[test]
    fn promoted_cell_is_no_longer_promotable() {
        let current = beta_only();
        let cell = Cell::new("latest", Risk::Beta, "amd64");
        let before = eval(&current, &PendingReleases::new(), true, &cell);
        assert!(before.can_be_promoted);

        let pending = PendingReleases::new().promote(&r1(), before.target.expect("target"));
        let after = eval(&current, &pending, true, &cell);
        assert!(!after.can_be_promoted);
    }

    #[test]
    fn stable_cell_is_never_promotable() {
        let current =
            ReleaseMatrix::new().with(Channel::new("latest", Risk::Stable), "amd64", r1());
        let state = eval(
            &current,
            &PendingReleases::new(),
            true,
            &Cell::new("latest", Risk::Stable, "amd64"),
        );
        assert!(!state.can_be_promoted);
        assert_eq!(state.target, None);
    }

    #[test]
    fn empty_cell_is_not_promotable_and_not_pending() {
        let state = eval(
            &beta_only(),
            &PendingReleases::new(),
            true,
            &Cell::new("latest", Risk::Edge, "amd64"),
        );
        assert_eq!(state.displayed, None);
        assert!(!state.can_be_promoted);
        assert!(!state.has_pending_release);
    }

    #[test]
    fn same_revision_in_target_blocks_promotion() {
        let current = beta_only().with(Channel::new("latest", Risk::Candidate), "amd64", r1());
        let state = eval(
            &current,
            &PendingReleases::new(),
            true,
            &Cell::new("latest", Risk::Beta, "amd64"),
        );
        assert!(!state.can_be_promoted);
    }

    #[test]
    fn different_revision_in_target_allows_promotion() {
        let current = beta_only().with(
            Channel::new("latest", Risk::Candidate),
            "amd64",
            Revision::new(0, "0.9", ["amd64"]),
        );
        let state = eval(
            &current,
            &PendingReleases::new(),
            true,
            &Cell::new("latest", Risk::Beta, "amd64"),
        );
        assert!(state.can_be_promoted);
    }

    #[test]
    fn disabled_promotion_keeps_pending_indicator() {
        let pending =
            PendingReleases::new().promote(&r1(), Channel::new("latest", Risk::Candidate));
        let current = beta_only();

        let beta = eval(&current, &pending, false, &Cell::new("latest", Risk::Beta, "amd64"));
        assert!(!beta.can_be_promoted);

        let candidate = Cell::new("latest", Risk::Candidate, "amd64");
        let enabled = eval(&current, &pending, true, &candidate);
        let disabled = eval(&current, &pending, false, &candidate);
        assert!(enabled.can_be_promoted);
        assert!(!disabled.can_be_promoted);
        assert_eq!(enabled.has_pending_release, disabled.has_pending_release);
        assert!(disabled.has_pending_release);
    }

    #[test]
    fn track_rows_follow_ladder_and_arch_order() {
        let current = beta_only();
        let next = project(&current, &PendingReleases::new());
        let archs = vec!["arm64".to_string(), "amd64".to_string()];
        let rows = Evaluator::new(&current, &next, true).track_rows("latest", &archs);

        let channels: Vec<String> = rows.iter().map(|r| r.channel.to_string()).collect();
        assert_eq!(
            channels,
            vec!["latest/stable", "latest/candidate", "latest/beta", "latest/edge"]
        );
        let beta = &rows[2];
        assert_eq!(beta.cells[0].arch, "arm64");
        assert_eq!(beta.cells[0].state.displayed, None);
        assert!(beta.cells[1].state.can_be_promoted);
    }

    #[test]
    fn parses_cells() {
        let cell: Cell = "2.0/edge:arm64".parse().expect("parse cell");
        assert_eq!(cell, Cell::new("2.0", Risk::Edge, "arm64"));
        assert_eq!(cell.to_string(), "2.0/edge:arm64");
        assert!(matches!(
            "latest/edge".parse::<Cell>(),
            Err(ParseCellError::MissingArch(_))
        ));
        assert!(matches!(
            "latest/nightly:amd64".parse::<Cell>(),
            Err(ParseCellError::Channel(_))
        ));
    }

    #[test]
    fn revision_not_built_for_the_arch_is_not_promotable() {
        let current = ReleaseMatrix::new().with(
            Channel::new("latest", Risk::Beta),
            "amd64",
            Revision::new(1, "1.0", ["arm64"]),
        );
        let state = eval(
            &current,
            &PendingReleases::new(),
            true,
            &Cell::new("latest", Risk::Beta, "amd64"),
        );
        assert!(state.displayed.is_some());
        assert!(!state.can_be_promoted);
    }
