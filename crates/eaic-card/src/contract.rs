//! # Output Format Contract
//!
//! The fixed contract the tutor's final output must follow: a markdown
//! process/evidence table with named columns and a minimum row count.
//! The contract's machine-readable schema is also inlined verbatim into
//! the paste text so a human reader sees exactly what the model sees.

use serde::{Deserialize, Serialize};

/// One column of the required table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractColumn {
    /// Column header.
    pub name: String,
    /// Cell value type (always `"string"` in the current contract).
    #[serde(rename = "type")]
    pub value_type: String,
}

/// The machine-readable table schema inside the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Schema kind discriminator (always `"table"`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Required columns, in order.
    pub columns: Vec<ContractColumn>,
    /// Minimum number of data rows.
    pub min_rows: u32,
}

/// The output format contract attached to every card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputContract {
    /// Stable contract identifier.
    pub contract_id: String,
    /// Output format name.
    pub format: String,
    /// Machine-readable shape of the required output.
    pub schema: TableSchema,
}

impl OutputContract {
    /// The fixed process/evidence table contract, v1.
    pub fn process_evidence_table() -> Self {
        let column = |name: &str| ContractColumn {
            name: name.to_string(),
            value_type: "string".to_string(),
        };
        Self {
            contract_id: "process_evidence_table_v1".to_string(),
            format: "markdown_table".to_string(),
            schema: TableSchema {
                kind: "table".to_string(),
                columns: vec![
                    column("Stap"),
                    column("Wat deed de leerling"),
                    column("Welke AI-hulp"),
                    column("Controle of bewijs"),
                ],
                min_rows: 4,
            },
        }
    }
}
