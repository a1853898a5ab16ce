// This file implements the transaction system - the core of how value moves in my ledger
// I'm following the UTXO (Unspent Transaction Output) model: each transaction consumes
// previously created outputs and always produces exactly two new ones

use crate::error::{LedgerError, Result};
use crate::utils::{sha256_hex, to_pretty_json};
use serde::Serialize;

// This represents a transaction output - it's like a "check" payable to a named recipient
// Think of it as "30 coins now belong to whoever is called Alice"
#[derive(Debug, Clone, Serialize)]
pub struct TransactionOutput {
    recipient: String,             // The name this value is payable to
    value: u64,                    // How many coins this output is worth
    parent_transaction_id: String, // The id of the transaction that created this output
    id: String,                    // Content-derived id over recipient, value and parent
}

impl TransactionOutput {
    pub fn new(recipient: &str, value: u64, parent_transaction_id: &str) -> TransactionOutput {
        // The id commits to everything the output says, in this exact field order
        let id = sha256_hex(&format!("{recipient}{value}{parent_transaction_id}"));
        TransactionOutput {
            recipient: recipient.to_string(),
            value,
            parent_transaction_id: parent_transaction_id.to_string(),
            id,
        }
    }

    // I use these getters to access the output data safely
    pub fn get_recipient(&self) -> &str {
        &self.recipient
    }

    pub fn get_value(&self) -> u64 {
        self.value
    }

    pub fn get_parent_transaction_id(&self) -> &str {
        &self.parent_transaction_id
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }
}

// This represents a transaction input - a claim on an output created earlier
// It caches the two things spending needs: how much the output is worth and which one it is
#[derive(Debug, Clone, Serialize)]
pub struct TransactionInput {
    value: u64,        // Cached value of the referenced output (the spendable amount)
    output_id: String, // The id of the output being consumed
}

impl TransactionInput {
    pub fn new(output: &TransactionOutput) -> TransactionInput {
        TransactionInput {
            value: output.get_value(),
            output_id: output.get_id().to_string(),
        }
    }

    pub fn get_value(&self) -> u64 {
        self.value
    }

    pub fn get_output_id(&self) -> &str {
        &self.output_id
    }
}

// This is the main transaction structure - it represents one transfer of value
// A transaction takes some inputs and redistributes their whole sum over exactly
// two outputs: change back to the sender, then the payment to the recipient
#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    sender: String,                 // Who is paying
    recipient: String,              // Who is being paid
    value: u64,                     // How much the recipient receives
    id: String,                     // Hash of sender, recipient and value
    inputs: Vec<TransactionInput>,  // What is being spent
    outputs: Vec<TransactionOutput>, // Always [change to sender, payment to recipient]
}

impl Transaction {
    // When I create a transaction I check coverage first: the inputs must be
    // worth at least the transfer value, with no exception for zero-value
    // transfers or empty input lists
    pub fn new(
        sender: &str,
        recipient: &str,
        value: u64,
        inputs: Vec<TransactionInput>,
    ) -> Result<Transaction> {
        let available = sum_input_values(&inputs)?;
        if available < value {
            return Err(LedgerError::InsufficientFunds {
                required: value,
                available,
            });
        }

        // The id covers only who pays whom how much; the inputs don't feed it
        let id = sha256_hex(&format!("{sender}{recipient}{value}"));

        // Whatever the inputs are worth beyond the transfer value comes back
        // to the sender, even when that change is zero
        let change = available - value;
        let outputs = vec![
            TransactionOutput::new(sender, change, &id),
            TransactionOutput::new(recipient, value, &id),
        ];

        Ok(Transaction {
            sender: sender.to_string(),
            recipient: recipient.to_string(),
            value,
            id,
            inputs,
            outputs,
        })
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    pub fn get_sender(&self) -> &str {
        &self.sender
    }

    pub fn get_recipient(&self) -> &str {
        &self.recipient
    }

    pub fn get_value(&self) -> u64 {
        self.value
    }

    pub fn get_inputs(&self) -> &[TransactionInput] {
        self.inputs.as_slice()
    }

    pub fn get_outputs(&self) -> &[TransactionOutput] {
        self.outputs.as_slice()
    }

    /// The change output returned to the sender. Always present at index 0.
    pub fn change_output(&self) -> &TransactionOutput {
        &self.outputs[0]
    }

    /// The payment output owed to the recipient. Always present at index 1.
    pub fn payment_output(&self) -> &TransactionOutput {
        &self.outputs[1]
    }

    pub fn to_json(&self) -> Result<String> {
        to_pretty_json(self)
    }
}

// Summing with checked_add so a hostile input list can't wrap the total
fn sum_input_values(inputs: &[TransactionInput]) -> Result<u64> {
    let mut total = 0u64;
    for input in inputs {
        total = total
            .checked_add(input.get_value())
            .ok_or_else(|| LedgerError::Transaction("Input value overflow".to_string()))?;
    }
    Ok(total)
}
