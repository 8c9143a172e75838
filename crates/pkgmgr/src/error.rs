use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no command specified")]
    MissingCommand,

    #[error(transparent)]
    Launch(#[from] pkgmgr_platform::Error),
}
