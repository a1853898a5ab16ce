// A wallet is just a display name plus the inputs it currently owns
// Balance is whatever those inputs sum to; nothing else tracks it

use crate::core::{Transaction, TransactionInput, TransactionOutput};
use crate::error::Result;
use crate::utils::to_pretty_json;
use log::debug;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Wallet {
    name: String,                   // The name outputs are made payable to
    utxos: Vec<TransactionInput>,   // Spendable inputs, in arrival order
}

impl Wallet {
    pub fn new(name: &str) -> Wallet {
        Wallet {
            name: name.to_string(),
            utxos: Vec::new(),
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_utxos(&self) -> &[TransactionInput] {
        self.utxos.as_slice()
    }

    /// Total value currently owned by this wallet.
    pub fn balance(&self) -> u64 {
        self.utxos
            .iter()
            .map(TransactionInput::get_value)
            .fold(0u64, u64::saturating_add)
    }

    /// Take ownership of an output by wrapping it into a fresh input.
    pub fn receive(&mut self, output: &TransactionOutput) {
        self.utxos.push(TransactionInput::new(output));
    }

    /// Transfer `value` coins to `recipient`.
    ///
    /// Inputs are selected greedily in arrival order: each one is taken
    /// while the remaining need is still positive, so the selection can
    /// overshoot by one input but never undershoots. Coverage itself is
    /// only checked by Transaction::new; when it fails, neither wallet is
    /// touched. The two `&mut` receivers hold exclusive access to both
    /// wallets across the whole select-construct-settle sequence.
    pub fn send_funds(&mut self, recipient: &mut Wallet, value: u64) -> Result<Transaction> {
        let selected = self.select_inputs(value);

        let transaction = Transaction::new(
            &self.name,
            &recipient.name,
            value,
            self.utxos[..selected].to_vec(),
        )?;

        debug!(
            "{} pays {} {} using {selected} of {} inputs",
            self.name,
            recipient.name,
            value,
            self.utxos.len()
        );

        // Settle: drop what was spent, then bank both outputs
        self.utxos.drain(..selected);
        self.receive(transaction.change_output());
        recipient.receive(transaction.payment_output());

        Ok(transaction)
    }

    // How many leading inputs the greedy rule takes: keep taking while the
    // need left before the next input is still above zero
    fn select_inputs(&self, value: u64) -> usize {
        let mut remaining = i128::from(value);
        let mut selected = 0;
        for input in &self.utxos {
            if remaining <= 0 {
                break;
            }
            remaining -= i128::from(input.get_value());
            selected += 1;
        }
        selected
    }

    pub fn to_json(&self) -> Result<String> {
        to_pretty_json(self)
    }
}
