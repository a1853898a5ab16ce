use log::warn;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;
use std::sync::RwLock;

pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(Config::new);

const DEFAULT_DIFFICULTY: usize = 3;
const DEFAULT_GENESIS_VALUE: u64 = 100;

const MINING_DIFFICULTY_KEY: &str = "MINING_DIFFICULTY";
const GENESIS_VALUE_KEY: &str = "GENESIS_VALUE";

pub struct Config {
    inner: RwLock<HashMap<String, String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    // Settings start out from the environment; CLI overrides land later
    // through the setters
    pub fn new() -> Config {
        let mut map = HashMap::new();
        if let Ok(difficulty) = env::var(MINING_DIFFICULTY_KEY) {
            map.insert(String::from(MINING_DIFFICULTY_KEY), difficulty);
        }
        if let Ok(value) = env::var(GENESIS_VALUE_KEY) {
            map.insert(String::from(GENESIS_VALUE_KEY), value);
        }

        Config {
            inner: RwLock::new(map),
        }
    }

    /// Leading zero hex characters required of an accepted block hash.
    pub fn get_difficulty(&self) -> usize {
        let inner = self
            .inner
            .read()
            .expect("Failed to acquire read lock on config - this should never happen");
        match inner.get(MINING_DIFFICULTY_KEY) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("Ignoring unparseable {MINING_DIFFICULTY_KEY} value {raw:?}, using default {DEFAULT_DIFFICULTY}");
                DEFAULT_DIFFICULTY
            }),
            None => DEFAULT_DIFFICULTY,
        }
    }

    pub fn set_difficulty(&self, difficulty: usize) {
        let mut inner = self
            .inner
            .write()
            .expect("Failed to acquire write lock on config - this should never happen");
        inner.insert(String::from(MINING_DIFFICULTY_KEY), difficulty.to_string());
    }

    /// Value minted to the first wallet by the genesis transaction.
    pub fn get_genesis_value(&self) -> u64 {
        let inner = self
            .inner
            .read()
            .expect("Failed to acquire read lock on config - this should never happen");
        match inner.get(GENESIS_VALUE_KEY) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("Ignoring unparseable {GENESIS_VALUE_KEY} value {raw:?}, using default {DEFAULT_GENESIS_VALUE}");
                DEFAULT_GENESIS_VALUE
            }),
            None => DEFAULT_GENESIS_VALUE,
        }
    }

    pub fn set_genesis_value(&self, value: u64) {
        let mut inner = self
            .inner
            .write()
            .expect("Failed to acquire write lock on config - this should never happen");
        inner.insert(String::from(GENESIS_VALUE_KEY), value.to_string());
    }
}
