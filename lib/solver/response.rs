use serde::Deserialize;

/// What a remote solver answered.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(from = "Reply")]
pub enum SolveResponse {
    /// The position of the chosen move among the legal moves.
    ///
    /// Any JSON integer is representable, whether or not it is in range.
    Chosen(i128),
    /// The solver explicitly refused to choose a move.
    Failed(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Reply {
    Bare(Integer),
    Index(Index),
    Error(Failure),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Integer {
    Unsigned(u64),
    Signed(i64),
}

impl From<Integer> for i128 {
    fn from(i: Integer) -> Self {
        match i {
            Integer::Unsigned(u) => u.into(),
            Integer::Signed(s) => s.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Index {
    index: Integer,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Failure {
    error: String,
}

impl From<Reply> for SolveResponse {
    fn from(r: Reply) -> Self {
        match r {
            Reply::Bare(i) | Reply::Index(Index { index: i }) => SolveResponse::Chosen(i.into()),
            Reply::Error(Failure { error }) => SolveResponse::Failed(error),
        }
    }
}
