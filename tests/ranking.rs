//! Integration tests for round-robin rankings.

use bracket_view::{
    compute_ranking, ranking_to_csv, Lang, Match, MatchResult, MatchStatus, Participant,
    ParticipantResult, RankingColumn, Scoring, RANKING_COLUMNS,
};

fn game(id: u32, round_id: u32, o1: ParticipantResult, o2: ParticipantResult) -> Match {
    Match {
        id,
        stage_id: 0,
        group_id: 0,
        round_id,
        number: 1,
        child_count: 0,
        status: MatchStatus::Completed,
        opponent1: Some(o1),
        opponent2: Some(o2),
    }
}

fn won(id: u32) -> ParticipantResult {
    ParticipantResult::participant(id).with_result(MatchResult::Win)
}

fn lost(id: u32) -> ParticipantResult {
    ParticipantResult::participant(id).with_result(MatchResult::Loss)
}

fn drew(id: u32) -> ParticipantResult {
    ParticipantResult::participant(id).with_result(MatchResult::Draw)
}

fn open(id: u32) -> ParticipantResult {
    ParticipantResult::participant(id)
}

/// 4 participants, mixed results, one match still open. 1 and 2 finish level on 4 points.
fn mixed_group() -> Vec<Match> {
    vec![
        game(0, 0, won(1), lost(2)),
        game(1, 0, drew(3), drew(4)),
        game(2, 1, drew(1), drew(3)),
        game(3, 1, won(2), lost(4)),
        game(4, 2, open(1), open(4)),
        game(5, 2, drew(2), drew(3)),
    ]
}

#[test]
fn ranking_sorted_by_points_with_stable_ties() {
    let ranking = compute_ranking(&mixed_group(), &Scoring::default());
    let order: Vec<u32> = ranking.iter().map(|r| r.id).collect();
    assert_eq!(order, vec![1, 2, 3, 4]);

    let points: Vec<i32> = ranking.iter().map(|r| r.stats.points).collect();
    assert_eq!(points, vec![4, 4, 3, 1]);

    let ranks: Vec<u32> = ranking.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4]);

    // Same input, same table.
    assert_eq!(ranking, compute_ranking(&mixed_group(), &Scoring::default()));
}

#[test]
fn wins_break_ties_on_points() {
    // 5 draws 3 times (3 pts, 0 wins); 6 wins once (3 pts, 1 win) and appears later.
    let matches = vec![
        game(0, 0, drew(5), drew(7)),
        game(1, 1, drew(5), drew(8)),
        game(2, 2, drew(5), drew(9)),
        game(3, 3, won(6), lost(10)),
    ];
    let ranking = compute_ranking(&matches, &Scoring::default());
    assert_eq!(ranking[0].id, 6);
    assert_eq!(ranking[1].id, 5);
}

#[test]
fn points_total_matches_completed_results() {
    let scoring = Scoring::default();
    let ranking = compute_ranking(&mixed_group(), &scoring);
    let total: i32 = ranking.iter().map(|r| r.stats.points).sum();
    // Two decided matches (3 each) and three draws (1 + 1 each).
    assert_eq!(total, 2 * scoring.win + 3 * 2 * scoring.draw);
}

#[test]
fn open_match_counts_nothing_but_keeps_participants() {
    let ranking = compute_ranking(&mixed_group(), &Scoring::default());
    let p1 = ranking.iter().find(|r| r.id == 1).unwrap();
    assert_eq!(p1.stats.played, 2);
    assert_eq!(p1.stats.wins, 1);
    assert_eq!(p1.stats.draws, 1);
    assert_eq!(p1.stats.losses, 0);
}

#[test]
fn undecided_group_is_all_zero_in_input_order() {
    let matches = vec![
        game(0, 0, open(9), open(4)),
        game(1, 0, open(2), open(7)),
    ];
    let ranking = compute_ranking(&matches, &Scoring::default());
    let order: Vec<u32> = ranking.iter().map(|r| r.id).collect();
    assert_eq!(order, vec![9, 4, 2, 7]);
    assert!(ranking.iter().all(|r| r.stats == Default::default()));
}

#[test]
fn draws_credit_both_sides() {
    let ranking = compute_ranking(&[game(0, 0, drew(1), drew(2))], &Scoring::default());
    assert!(ranking.iter().all(|r| r.stats.draws == 1 && r.stats.points == 1));
    assert!(ranking.iter().all(|r| r.stats.wins == 0 && r.stats.losses == 0));
}

#[test]
fn scores_and_forfeits_are_counted() {
    let forfeiter = ParticipantResult {
        forfeit: true,
        ..ParticipantResult::participant(1)
    };
    let matches = vec![
        game(0, 0, won(1).with_score(3), lost(2).with_score(1)),
        game(1, 1, forfeiter, won(2)),
    ];
    let ranking = compute_ranking(&matches, &Scoring::default());
    let p1 = ranking.iter().find(|r| r.id == 1).unwrap();
    assert_eq!(p1.stats.played, 2);
    assert_eq!(p1.stats.forfeits, 1);
    assert_eq!(p1.stats.score_for, 3);
    assert_eq!(p1.stats.score_against, 1);
    assert_eq!(p1.stats.score_difference, 2);
    assert_eq!(p1.value(RankingColumn::ScoreDifference), 2);
}

#[test]
fn huge_scores_and_points_saturate() {
    let matches = vec![
        game(0, 0, won(1).with_score(u32::MAX), lost(2).with_score(u32::MAX)),
        game(1, 1, won(1).with_score(5), lost(2).with_score(5)),
    ];
    let scoring = Scoring {
        win: i32::MAX,
        ..Scoring::default()
    };
    let ranking = compute_ranking(&matches, &scoring);
    let p1 = ranking.iter().find(|r| r.id == 1).unwrap();
    assert_eq!(p1.stats.score_for, u32::MAX);
    assert_eq!(p1.stats.score_against, u32::MAX);
    assert_eq!(p1.stats.score_difference, 0);
    assert_eq!(p1.stats.points, i32::MAX);
}

#[test]
fn byes_and_unknown_slots_are_skipped() {
    let mut bye = game(0, 0, won(1), lost(2));
    bye.opponent2 = None;
    let pending = game(1, 0, ParticipantResult::pending(1), open(3));
    let ranking = compute_ranking(&[bye, pending], &Scoring::default());
    let order: Vec<u32> = ranking.iter().map(|r| r.id).collect();
    assert_eq!(order, vec![1, 3]);
}

#[test]
fn csv_export_uses_column_order_and_names() {
    let participants = vec![Participant::new(1, "Alice"), Participant::new(2, "Bob")];
    let ranking = compute_ranking(&[game(0, 0, won(1), lost(2))], &Scoring::default());
    let csv = ranking_to_csv(&ranking, &participants, &Lang::default()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "#,Name,P,W,D,L,F,SF,SA,+/-,Pts");
    assert_eq!(lines[1], "1,Alice,1,1,0,0,0,0,0,0,3");
    assert_eq!(lines[2], "2,Bob,1,0,0,1,0,0,0,0,0");
    assert_eq!(RANKING_COLUMNS.len(), lines[0].split(',').count());
}
