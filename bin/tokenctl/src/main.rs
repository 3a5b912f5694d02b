//! CLI for driving a Human Standard Token contract through a ledger node.
//!
//! Each verb maps to one contract interaction:
//! - `deploy`: put a fresh token on the ledger
//! - read verbs (`name`, `balance-of`, ...): query state without a transaction
//! - write verbs (`transfer`, `approve`, ...): submit through the node's
//!   managed account and report the event the contract emitted
//!
//! Write verbs accept `--private-for` to share the payload with specific
//! nodes only; without it the transaction is public.
//!
//! Every result is printed as JSON: scalars for reads and the deployed
//! address, objects for write responses.

use alloy_primitives::{Address, Bytes, U256};
use clap::{Parser, Subcommand};
use config::NodeConfig;
use serde::Serialize;
use service::TokenService;
use tracing::info;

#[derive(Parser)]
#[command(name = "tokenctl")]
#[command(about = "Operate a Human Standard Token contract through a ledger node")]
struct Cli {
    /// Path to the configuration file; environment variables are used when
    /// no file is given
    #[arg(short, long)]
    config: Option<String>,

    /// Recipient public key for a private transaction; repeat the flag for
    /// several recipients (write commands only)
    #[arg(long = "private-for", value_name = "KEY")]
    private_for: Vec<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Deploy a fresh token contract
    Deploy {
        initial_amount: U256,
        token_name: String,
        decimal_units: u64,
        token_symbol: String,
    },

    /// Query the token name
    Name { contract: Address },

    /// Query the ticker symbol
    Symbol { contract: Address },

    /// Query the contract interface version
    Version { contract: Address },

    /// Query the display decimals
    Decimals { contract: Address },

    /// Query the total number of token units
    TotalSupply { contract: Address },

    /// Query an account balance
    BalanceOf { contract: Address, owner: Address },

    /// Query the remaining spending allowance of a spender
    Allowance {
        contract: Address,
        owner: Address,
        spender: Address,
    },

    /// Authorize a spender up to the given value
    Approve {
        contract: Address,
        spender: Address,
        value: U256,
    },

    /// Move tokens from the node account to a recipient
    Transfer {
        contract: Address,
        to: Address,
        value: U256,
    },

    /// Move tokens between third-party accounts within an allowance
    TransferFrom {
        contract: Address,
        from: Address,
        to: Address,
        value: U256,
    },

    /// Approve a spender and notify it, passing extra data (hex) through
    ApproveAndCall {
        contract: Address,
        spender: Address,
        value: U256,
        extra_data: Bytes,
    },
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => NodeConfig::from_file(path)?,
        None => NodeConfig::from_env()?,
    };

    info!("Loaded config:");
    info!("  Endpoint: {}", config.endpoint);
    info!("  From address: {}", config.from_address);

    let provider = client::create_provider(&config.endpoint).await?;
    let service = TokenService::new(provider, config);
    let private_for = cli.private_for;

    match cli.command {
        Command::Deploy {
            initial_amount,
            token_name,
            decimal_units,
            token_symbol,
        } => {
            let address = service
                .deploy(
                    private_for,
                    initial_amount,
                    &token_name,
                    decimal_units,
                    &token_symbol,
                )
                .await?;
            print_json(&address)?;
        }
        Command::Name { contract } => print_json(&service.name(contract).await?)?,
        Command::Symbol { contract } => print_json(&service.symbol(contract).await?)?,
        Command::Version { contract } => print_json(&service.version(contract).await?)?,
        Command::Decimals { contract } => print_json(&service.decimals(contract).await?)?,
        Command::TotalSupply { contract } => {
            print_json(&service.total_supply(contract).await?)?;
        }
        Command::BalanceOf { contract, owner } => {
            print_json(&service.balance_of(contract, owner).await?)?;
        }
        Command::Allowance {
            contract,
            owner,
            spender,
        } => {
            print_json(&service.allowance(contract, owner, spender).await?)?;
        }
        Command::Approve {
            contract,
            spender,
            value,
        } => {
            let response = service.approve(private_for, contract, spender, value).await?;
            print_json(&response)?;
        }
        Command::Transfer {
            contract,
            to,
            value,
        } => {
            let response = service.transfer(private_for, contract, to, value).await?;
            print_json(&response)?;
        }
        Command::TransferFrom {
            contract,
            from,
            to,
            value,
        } => {
            let response = service
                .transfer_from(private_for, contract, from, to, value)
                .await?;
            print_json(&response)?;
        }
        Command::ApproveAndCall {
            contract,
            spender,
            value,
            extra_data,
        } => {
            let response = service
                .approve_and_call(private_for, contract, spender, value, &extra_data)
                .await?;
            print_json(&response)?;
        }
    }

    Ok(())
}

fn to_json<T: Serialize>(value: &T) -> eyre::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn print_json<T: Serialize>(value: &T) -> eyre::Result<()> {
    println!("{}", to_json(value)?);
    Ok(())
}
