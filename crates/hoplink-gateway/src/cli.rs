use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const LISTEN_ADDR_ENV: &str = "HOPLINK_LISTEN_ADDR";
pub const BASE_URL_ENV: &str = "HOPLINK_BASE_URL";
pub const STORAGE_BACKEND_ENV: &str = "HOPLINK_STORAGE_BACKEND";
pub const DATA_DIR_ENV: &str = "HOPLINK_DATA_DIR";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "fs")]
    Fs,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Fs => write!(f, "fs"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "hoplink-gateway")]
pub struct Cli {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Base URL prefix used to compose shortened URLs.
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    /// Bucket directory for the fs backend.
    #[arg(long, env = DATA_DIR_ENV, required_if_eq("storage", "fs"))]
    pub data_dir: Option<PathBuf>,
}
