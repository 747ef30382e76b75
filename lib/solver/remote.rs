use crate::game::Snapshot;
use crate::solver::{resolve, Exchange, Http, SolveRequest};
use crate::strategy::{Strategy, StrategyError};
use serde::Serialize;
use tracing::{debug, instrument};

/// A [`Strategy`] that delegates move selection to a remote solver.
///
/// Each call encodes the [`Snapshot`], performs exactly one [`Exchange`], and resolves the
/// answer against the legal moves. Nothing is retained between calls.
#[derive(Debug, Clone)]
pub struct Remote<E = Http> {
    ai: String,
    exchange: E,
}

impl<E> Remote<E> {
    /// Constructs [`Remote`] tagging every request with the solver strategy `ai`.
    pub fn new<S: Into<String>>(ai: S, exchange: E) -> Self {
        Remote {
            ai: ai.into(),
            exchange,
        }
    }

    /// The tag of the solver strategy.
    pub fn ai(&self) -> &str {
        &self.ai
    }

    /// The underlying [`Exchange`].
    pub fn exchange(&self) -> &E {
        &self.exchange
    }
}

impl<B, M, E> Strategy<B, M> for Remote<E>
where
    B: Serialize,
    M: Serialize + Clone,
    E: Exchange,
{
    #[instrument(level = "debug", skip_all, fields(ai = %self.ai, turn = %snapshot.turn()), err)]
    fn find_best_move(&self, snapshot: &Snapshot<B, M>) -> Result<M, StrategyError> {
        let request = SolveRequest::encode(snapshot, &self.ai)?;
        let response = self.exchange.exchange(&request)?;
        debug!(?response);
        Ok(resolve(&response, snapshot.moves())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Color;
    use crate::solver::{InvalidResponseError, MockExchange, SolveResponse};
    use crate::solver::{TimeoutError, TransportError};
    use proptest::sample::size_range;
    use reqwest::StatusCode;
    use std::time::Duration;
    use test_strategy::proptest;

    #[proptest]
    fn find_best_move_returns_move_chosen_by_solver(
        board: Vec<u8>,
        #[any(size_range(1..=32).lift())] moves: Vec<u32>,
        c: Color,
        ai: String,
        #[strategy(0..#moves.len())] i: usize,
    ) {
        let mut exchange = MockExchange::new();
        exchange
            .expect_exchange()
            .once()
            .returning(move |_| Ok(SolveResponse::Chosen(i as i128)));

        let remote = Remote::new(ai, exchange);
        let snapshot = Snapshot::new(board, moves.clone(), c);
        assert_eq!(remote.find_best_move(&snapshot).ok(), Some(moves[i]));
    }

    #[proptest]
    fn find_best_move_sends_snapshot_tagged_with_solver_strategy(
        board: Vec<u8>,
        #[any(size_range(1..=32).lift())] moves: Vec<u32>,
        c: Color,
        ai: String,
    ) {
        let snapshot = Snapshot::new(board, moves, c);
        let expected = SolveRequest::encode(&snapshot, &ai)?;

        let mut exchange = MockExchange::new();
        exchange
            .expect_exchange()
            .once()
            .withf(move |r| *r == expected)
            .returning(|_| Ok(SolveResponse::Chosen(0)));

        let remote = Remote::new(ai, exchange);
        assert_eq!(remote.find_best_move(&snapshot).ok(), snapshot.moves().first().copied());
    }

    #[proptest]
    fn find_best_move_picks_the_second_of_three_moves(board: Vec<u8>, c: Color) {
        let moves = vec!["A".to_string(), "B".to_string(), "C".to_string()];

        let mut exchange = MockExchange::new();
        exchange
            .expect_exchange()
            .once()
            .returning(|_| Ok(SolveResponse::Chosen(1)));

        let remote = Remote::new("negamax", exchange);
        let snapshot = Snapshot::new(board, moves, c);
        assert_eq!(remote.find_best_move(&snapshot).ok().as_deref(), Some("B"));
    }

    #[proptest]
    fn find_best_move_fails_without_contacting_solver_if_there_are_no_legal_moves(
        board: Vec<u8>,
        c: Color,
        ai: String,
    ) {
        let mut exchange = MockExchange::new();
        exchange.expect_exchange().never();

        let remote = Remote::new(ai, exchange);
        let snapshot = Snapshot::<_, u32>::new(board, Vec::new(), c);

        assert!(matches!(
            remote.find_best_move(&snapshot),
            Err(StrategyError::EmptyLegalMoveSet(_))
        ));
    }

    #[proptest]
    fn find_best_move_fails_if_solver_times_out(
        board: Vec<u8>,
        #[any(size_range(1..=32).lift())] moves: Vec<u32>,
        c: Color,
        ai: String,
        d: Duration,
    ) {
        let mut exchange = MockExchange::new();
        exchange
            .expect_exchange()
            .once()
            .returning(move |_| Err(TimeoutError::new(d).into()));

        let remote = Remote::new(ai, exchange);
        let snapshot = Snapshot::new(board, moves, c);

        assert!(matches!(
            remote.find_best_move(&snapshot),
            Err(StrategyError::Timeout(e)) if e.after() == d
        ));
    }

    #[proptest]
    fn find_best_move_fails_if_solver_is_unavailable(
        board: Vec<u8>,
        #[any(size_range(1..=32).lift())] moves: Vec<u32>,
        c: Color,
        ai: String,
    ) {
        let mut exchange = MockExchange::new();
        exchange
            .expect_exchange()
            .once()
            .returning(|_| Err(TransportError::from(StatusCode::SERVICE_UNAVAILABLE).into()));

        let remote = Remote::new(ai, exchange);
        let snapshot = Snapshot::new(board, moves, c);

        assert!(matches!(
            remote.find_best_move(&snapshot),
            Err(StrategyError::Transport(TransportError::Status(s)))
                if s == StatusCode::SERVICE_UNAVAILABLE
        ));
    }

    #[proptest]
    fn find_best_move_never_falls_back_to_another_move(
        board: Vec<u8>,
        moves: Vec<u32>,
        c: Color,
        ai: String,
        #[filter(#i < 0 || #i >= #moves.len() as i128)] i: i128,
    ) {
        let mut exchange = MockExchange::new();
        exchange
            .expect_exchange()
            .times(usize::from(!moves.is_empty()))
            .returning(move |_| Ok(SolveResponse::Chosen(i)));

        let remote = Remote::new(ai, exchange);
        let snapshot = Snapshot::new(board, moves.clone(), c);

        match remote.find_best_move(&snapshot) {
            Err(StrategyError::InvalidResponse(e)) => {
                assert_eq!(e, InvalidResponseError::OutOfRange { index: i, moves: moves.len() })
            }

            Err(StrategyError::EmptyLegalMoveSet(_)) => assert!(moves.is_empty()),
            r => panic!("unexpected result {:?}", r),
        }
    }

    #[proptest]
    fn find_best_move_fails_if_solver_refuses(
        board: Vec<u8>,
        #[any(size_range(1..=32).lift())] moves: Vec<u32>,
        c: Color,
        ai: String,
        reason: String,
    ) {
        let mut exchange = MockExchange::new();
        let failure = reason.clone();
        exchange
            .expect_exchange()
            .once()
            .returning(move |_| Ok(SolveResponse::Failed(failure.clone())));

        let remote = Remote::new(ai, exchange);
        let snapshot = Snapshot::new(board, moves, c);

        assert!(matches!(
            remote.find_best_move(&snapshot),
            Err(StrategyError::InvalidResponse(InvalidResponseError::Failed { reason: r })) if r == reason
        ));
    }
}
