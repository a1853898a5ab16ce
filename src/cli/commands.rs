use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "pocket-ledger",
    about = "Run the proof-of-work UTXO ledger demo scenario"
)]
pub struct Opt {
    #[arg(
        long,
        help = "Leading zero hex characters required of an accepted block hash"
    )]
    pub difficulty: Option<usize>,

    #[arg(
        long = "genesis-value",
        help = "Value minted to the first wallet by the genesis transaction"
    )]
    pub genesis_value: Option<u64>,
}
