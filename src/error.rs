use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MomentError {
    #[error("index ({i},{j}) exceeds the moment order {order}")]
    IndexOutOfOrder { i: usize, j: usize, order: usize },
}
