//! Read-only operational records: invoices, lab tests and inventory.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Invoice payment state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
}

/// A patient invoice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub date: NaiveDate,
    pub amount: f64,
    pub status: InvoiceStatus,
    /// Billed line descriptions, in order
    pub items: Vec<String>,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Overdue => "Overdue",
        }
    }
}

impl Invoice {
    /// Pending and overdue invoices still carry an outstanding balance.
    pub fn is_outstanding(&self) -> bool {
        matches!(self.status, InvoiceStatus::Pending | InvoiceStatus::Overdue)
    }
}

/// Lab test progress.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LabStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

/// A laboratory test request with a snapshot of the patient's details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LabTest {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_contact: Option<String>,
    pub test_name: String,
    pub date: NaiveDate,
    pub status: LabStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    /// Display name of the requesting doctor
    pub requested_by: String,
}

impl LabStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabStatus::Pending => "Pending",
            LabStatus::InProgress => "In Progress",
            LabStatus::Completed => "Completed",
        }
    }
}

impl LabTest {
    pub fn is_open(&self) -> bool {
        matches!(self.status, LabStatus::Pending | LabStatus::InProgress)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum InventoryCategory {
    Medication,
    Equipment,
    Consumable,
}

impl InventoryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            InventoryCategory::Medication => "Medication",
            InventoryCategory::Equipment => "Equipment",
            InventoryCategory::Consumable => "Consumable",
        }
    }
}

/// Stock level, set explicitly and never derived from quantity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StockStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }
}

/// A pharmacy or stores inventory line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub category: InventoryCategory,
    pub quantity: u32,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
    pub status: StockStatus,
}

impl InventoryItem {
    pub fn needs_restock(&self) -> bool {
        matches!(self.status, StockStatus::LowStock | StockStatus::OutOfStock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lab_status_wire_name() {
        let json = r#"{"id":"lab-004","patientId":"pat-4","patientName":"Abena Korkor","testName":"Lipid Profile","date":"2023-10-13","status":"In Progress","requestedBy":"Dr. John Smith"}"#;
        let lab: LabTest = serde_json::from_str(json).unwrap();
        assert_eq!(lab.status, LabStatus::InProgress);
        assert!(lab.is_open());
        assert_eq!(lab.result, None);
    }

    #[test]
    fn test_inventory_status_is_not_derived() {
        let json = r#"{"id":"inv-003","name":"Disposable Syringes 5ml","category":"Consumable","quantity":150,"unit":"Pieces","status":"Low Stock"}"#;
        let item: InventoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.status, StockStatus::LowStock);
        assert!(item.needs_restock());
        assert_eq!(item.expiry_date, None);
    }

    #[test]
    fn test_display_names_match_wire_names() {
        let wire = |v: serde_json::Value| v.as_str().map(str::to_string);
        for status in [InvoiceStatus::Paid, InvoiceStatus::Pending, InvoiceStatus::Overdue] {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(wire(json).as_deref(), Some(status.as_str()));
        }
        for category in [
            InventoryCategory::Medication,
            InventoryCategory::Equipment,
            InventoryCategory::Consumable,
        ] {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(wire(json).as_deref(), Some(category.as_str()));
        }
        for status in [StockStatus::InStock, StockStatus::LowStock, StockStatus::OutOfStock] {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(wire(json).as_deref(), Some(status.as_str()));
        }
        for status in [LabStatus::Pending, LabStatus::InProgress, LabStatus::Completed] {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(wire(json).as_deref(), Some(status.as_str()));
        }
    }

    #[test]
    fn test_invoice_outstanding() {
        let json = r#"{"id":"inv-004","patientId":"pat-4","patientName":"Abena Korkor","date":"2023-10-04","amount":1200.0,"status":"Overdue","items":["Surgery Deposit"]}"#;
        let invoice: Invoice = serde_json::from_str(json).unwrap();
        assert!(invoice.is_outstanding());
        assert_eq!(invoice.items, vec!["Surgery Deposit".to_string()]);
    }
}
