//! The tennis refactoring kata, refactored.

const ADVANTAGE_MIN_POINTS: u32 = 4;

/// Returns the score call for a game where the players have won `p1` and `p2` points.
pub fn tennis_score(p1: u32, p2: u32) -> String {
    if p1 == p2 {
        return tied_score(p1);
    }
    if p1 >= ADVANTAGE_MIN_POINTS || p2 >= ADVANTAGE_MIN_POINTS {
        return endgame_score(p1, p2);
    }
    format!("{}-{}", point_name(p1), point_name(p2))
}

fn tied_score(points: u32) -> String {
    match points {
        0..=2 => format!("{}-All", point_name(points)),
        _ => "Deuce".to_string(),
    }
}

fn endgame_score(p1: u32, p2: u32) -> String {
    let leader = if p1 > p2 { "player1" } else { "player2" };
    match p1.abs_diff(p2) {
        1 => format!("Advantage {leader}"),
        _ => format!("Win for {leader}"),
    }
}

fn point_name(points: u32) -> &'static str {
    match points {
        0 => "Love",
        1 => "Fifteen",
        2 => "Thirty",
        _ => "Forty",
    }
}
