use std::{
	fs,
	path::{
		Path,
		PathBuf,
	},
	process,
	sync::Arc,
};

use structopt::StructOpt;
use tbtc_blockchain::{
	client::{
		ChainClient,
		Subscriber,
	},
	config::{
		ConfigError,
		EthereumConfig,
	},
	contracts::ContractsManager,
	keys::PrivateKey,
	proxies::{
		ChainContext,
		ProxyError,
		ProxyManager,
	},
};
use tracing::{
	debug,
	Level,
};
use web3::{
	transports::{
		Http,
		WebSocket,
	},
	Web3,
};

use crate::cli::{
	Command,
	Flags,
	Opt,
};

mod args;
mod cli;
mod commands;

#[tokio::main]
async fn main() {
	let opt = Opt::from_args();

	if let Err(e) = setup_logger(opt.verbose, opt.log_json) {
		eprintln!("Could not set up logging: {}", e);
		process::exit(1);
	}

	let config = match load_config(&opt) {
		Ok(config) => config,
		Err(e) => {
			eprintln!("Error loading configuration: {}", e);
			process::exit(1);
		},
	};

	let private_key = match init_private_key(&opt, &config) {
		Ok(private_key) => private_key,
		Err(e) => {
			eprintln!("{}", e);
			process::exit(1);
		},
	};

	let flags = opt.flags();
	let url = config.url.clone();
	let result = if url.starts_with("ws://") || url.starts_with("wss://") {
		let transport = match WebSocket::new(&url).await {
			Ok(transport) => transport,
			Err(e) => {
				eprintln!("Could not connect to ETH's RPC endpoint: {}", e);
				process::exit(1);
			},
		};
		let web3 = Arc::new(Web3::new(transport));
		let subscriber: Arc<dyn Subscriber> = web3.clone();
		execute(web3, Some(subscriber), private_key, config, opt.cmd, flags).await
	} else {
		let transport = match Http::new(&url) {
			Ok(transport) => transport,
			Err(e) => {
				eprintln!("Could not connect to ETH's RPC endpoint: {}", e);
				process::exit(1);
			},
		};
		execute(Arc::new(Web3::new(transport)), None, private_key, config, opt.cmd, flags).await
	};

	if let Err(e) = result {
		eprintln!("{}", e);
		process::exit(1);
	}
}

async fn execute<C: ChainClient>(
	client: Arc<C>,
	subscriber: Option<Arc<dyn Subscriber>>,
	private_key: PrivateKey,
	config: EthereumConfig,
	cmd: Command,
	flags: Flags,
) -> Result<(), ProxyError> {
	let context = ChainContext::connect(client, private_key, &config, subscriber).await?;
	let proxy_manager = ProxyManager::new(context, config, Arc::new(ContractsManager::new()?));

	match cmd {
		Command::MaintainerProxy(cmd) => cmd.run(&proxy_manager.maintainer_proxy()?, flags).await,
		Command::RedemptionWatchtower(cmd) =>
			cmd.run(&proxy_manager.redemption_watchtower()?, flags).await,
		Command::WalletCoordinator(cmd) => cmd.run(&proxy_manager.wallet_coordinator()?, flags).await,
	}
}

fn setup_logger(verbose: u8, json: bool) -> Result<(), String> {
	let level = match verbose {
		0 => Level::WARN,
		1 => Level::INFO,
		2 => Level::DEBUG,
		_ => Level::TRACE,
	};
	let mut env_filter = tracing_subscriber::EnvFilter::from_default_env();
	for target in ["tbtc", "tbtc_blockchain"] {
		let directive = format!("{}={}", target, level)
			.parse()
			.map_err(|e| format!("Invalid log directive: {}", e))?;
		env_filter = env_filter.add_directive(directive);
	}

	let logger = tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.with_target(true)
		.with_env_filter(env_filter);
	let result = if json { logger.json().try_init() } else { logger.try_init() };
	result.map_err(|e| e.to_string())
}

fn expand_path(path: &Path) -> Result<PathBuf, String> {
	expanduser::expanduser(path.to_string_lossy())
		.map_err(|e| format!("Could not expand path {}: {}", path.display(), e))
}

/// Reads the configuration file, if any, and applies the command line overrides.
fn load_config(opt: &Opt) -> Result<EthereumConfig, String> {
	let mut config = match &opt.config {
		Some(path) => EthereumConfig::from_file(expand_path(path)?).map_err(|e| e.to_string())?,
		None => EthereumConfig::default(),
	};

	if let Some(endpoint) = &opt.eth_rpc_endpoint {
		config.url = endpoint.clone();
	}
	if let Some(keystore_file) = &opt.keystore_file {
		config.account.key_file = Some(keystore_file.clone());
	}
	if config.url.is_empty() {
		return Err(ConfigError::MissingField("url").to_string())
	}

	debug!(message = "Loaded configuration", url = config.url.as_str());
	Ok(config)
}

fn init_private_key(opt: &Opt, config: &EthereumConfig) -> Result<PrivateKey, String> {
	let key_file = config
		.account
		.key_file
		.as_ref()
		.ok_or_else(|| ConfigError::MissingField("account.keyFile").to_string())?;
	let key_file = expand_path(key_file)?;

	let password = if let Some(password_file) = &opt.password_file {
		fs::read_to_string(expand_path(password_file)?)
			.map_err(|e| format!("Error reading password file: {:?}", e))?
			.trim()
			.to_owned()
	} else if let Some(password) = &config.account.key_file_password {
		password.clone()
	} else {
		rpassword::read_password_from_tty(Some("Password: "))
			.map_err(|e| format!("Could not read password: {:?}", e))?
	};

	PrivateKey::from_keyfile(key_file, password).map_err(|e| e.to_string())
}
