// This is the entry point for the ledger demo binary
// It runs one fixed scenario: mint coins to Alice, shuffle value between
// Alice and Bob, mine one block per transaction, then audit the chain
use clap::Parser;
use log::{error, LevelFilter};
use pocket_ledger::{
    Blockchain, Opt, Transaction, TransactionInput, TransactionOutput, Wallet, GENESIS_SENTINEL,
    GLOBAL_CONFIG,
};
use std::process;

fn main() {
    // I initialize logging so I can see what's happening while mining
    // Info level gives me enough detail without being too verbose
    env_logger::builder().filter_level(LevelFilter::Info).init();

    let opt = Opt::parse();

    // I run the scenario and handle any error that might occur
    // If something goes wrong, I log the error and exit with code 1
    if let Err(e) = run_demo(opt) {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn run_demo(opt: Opt) -> Result<(), Box<dyn std::error::Error>> {
    // CLI flags override the environment-seeded settings
    if let Some(difficulty) = opt.difficulty {
        GLOBAL_CONFIG.set_difficulty(difficulty);
    }
    if let Some(value) = opt.genesis_value {
        GLOBAL_CONFIG.set_genesis_value(value);
    }
    let difficulty = GLOBAL_CONFIG.get_difficulty();
    let genesis_value = GLOBAL_CONFIG.get_genesis_value();

    let mut alice = Wallet::new("Alice");
    let mut bob = Wallet::new("Bob");

    // The genesis transaction is the only place value enters the system:
    // it spends a minted output that exists nowhere else, and its payment
    // output seeds Alice's UTXO set
    let minted = TransactionOutput::new(GENESIS_SENTINEL, genesis_value, GENESIS_SENTINEL);
    let genesis = Transaction::new(
        GENESIS_SENTINEL,
        alice.get_name(),
        genesis_value,
        vec![TransactionInput::new(&minted)],
    )?;
    alice.receive(genesis.payment_output());

    // A fixed little economy: every transfer settles wallet-side before
    // its transaction is committed to a block
    let transaction1 = alice.send_funds(&mut bob, 50)?;
    let transaction2 = bob.send_funds(&mut alice, 30)?;
    let transaction3 = alice.send_funds(&mut bob, 10)?;

    println!("genesis:\n{}", genesis.to_json()?);
    println!("transaction1:\n{}", transaction1.to_json()?);
    println!("transaction2:\n{}", transaction2.to_json()?);
    println!("transaction3:\n{}", transaction3.to_json()?);
    println!("Alice:\n{}", alice.to_json()?);
    println!("Bob:\n{}", bob.to_json()?);

    // One transaction per block, each mined at the configured difficulty
    let mut blockchain = Blockchain::new();
    for transaction in [&genesis, &transaction1, &transaction2, &transaction3] {
        blockchain.mine_block(transaction.to_json()?, difficulty)?;
    }

    println!("Blockchain:");
    for block in blockchain.get_blocks() {
        println!("{}", block.to_json()?);
    }
    println!("Chain valid: {}", blockchain.is_valid());

    Ok(())
}
