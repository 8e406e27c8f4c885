use once_cell::sync::Lazy;
use std::sync::RwLock;

/// Supported chains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainType {
    /// Ethereum mainnet
    Ethereum,
    /// Base mainnet
    Base,
    /// Base Sepolia testnet
    BaseSepolia,
}

/// Static description of a chain
#[derive(Debug, Clone)]
pub struct ChainConfig {
    pub chain_id: u64,
    pub explorer_url: &'static str,
}

impl ChainConfig {
    const ETHEREUM: ChainConfig = ChainConfig {
        chain_id: 1,
        explorer_url: "https://etherscan.io",
    };

    const BASE: ChainConfig = ChainConfig {
        chain_id: 8453,
        explorer_url: "https://basescan.org",
    };

    const BASE_SEPOLIA: ChainConfig = ChainConfig {
        chain_id: 84532,
        explorer_url: "https://sepolia.basescan.org",
    };

    pub fn for_chain(chain: ChainType) -> &'static ChainConfig {
        match chain {
            ChainType::Ethereum => &Self::ETHEREUM,
            ChainType::Base => &Self::BASE,
            ChainType::BaseSepolia => &Self::BASE_SEPOLIA,
        }
    }

    /// Link to a transaction on the chain explorer
    pub fn tx_url(&self, tx_hash: &str) -> String {
        format!("{}/tx/{}", self.explorer_url, tx_hash)
    }
}

impl ChainType {
    /// Used when the listing does not name a chain
    pub const DEFAULT: ChainType = ChainType::BaseSepolia;

    pub const ALL: [ChainType; 3] = [ChainType::Ethereum, ChainType::Base, ChainType::BaseSepolia];

    pub fn display_name(&self) -> &'static str {
        match self {
            ChainType::Ethereum => "Ethereum",
            ChainType::Base => "Base",
            ChainType::BaseSepolia => "Base Sepolia",
        }
    }

    pub fn is_testnet(&self) -> bool {
        matches!(self, ChainType::BaseSepolia)
    }

    /// Find the chain with the given numeric id
    pub fn from_chain_id(chain_id: u64) -> Option<ChainType> {
        Self::ALL
            .into_iter()
            .find(|chain| ChainConfig::for_chain(*chain).chain_id == chain_id)
    }
}

/// Chain state - set once at startup
struct ChainState {
    current: RwLock<Option<ChainType>>,
}

impl ChainState {
    const fn new() -> Self {
        Self {
            current: RwLock::new(None),
        }
    }

    /// Returns true if set, false if a chain was already selected
    fn initialize(&self, chain: ChainType) -> bool {
        let Ok(mut current) = self.current.write() else {
            log::error!("Chain state lock poisoned");
            return false;
        };
        if current.is_some() {
            log::warn!("Attempted to change chain after initialization. Chain is locked.");
            return false;
        }
        *current = Some(chain);
        log::info!("===========================================");
        log::info!("Chain initialized: {} (id {}, {})",
                   chain.display_name(),
                   ChainConfig::for_chain(chain).chain_id,
                   if chain.is_testnet() { "TESTNET" } else { "MAINNET" });
        log::info!("===========================================");
        true
    }

    fn get(&self) -> Option<ChainType> {
        self.current.read().ok().and_then(|current| *current)
    }
}

static CHAIN_STATE: Lazy<ChainState> = Lazy::new(ChainState::new);

// ============ Public API ============

/// Select the chain the widget mints on - can only be called once
pub fn initialize_chain(chain: ChainType) -> bool {
    CHAIN_STATE.initialize(chain)
}

/// Current chain, None before initialization
pub fn get_chain() -> Option<ChainType> {
    CHAIN_STATE.get()
}

pub fn try_get_chain_config() -> Option<&'static ChainConfig> {
    get_chain().map(ChainConfig::for_chain)
}
