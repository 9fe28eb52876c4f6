//! Admin dashboard headline figures.

use crate::models::{InventoryItem, Invoice, InvoiceStatus, LabTest, Patient, User};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AdminOverview {
    pub total_patients: usize,
    pub total_staff: usize,
    pub doctors: usize,
    pub pending_invoices: usize,
    /// Pending and in-progress lab tests
    pub open_labs: usize,
    /// Low-stock and out-of-stock items
    pub restock_items: usize,
    /// Sum of pending and overdue invoice amounts
    pub outstanding_amount: f64,
}

pub fn admin_overview(
    patients: &[Patient],
    staff: &[User],
    invoices: &[Invoice],
    labs: &[LabTest],
    inventory: &[InventoryItem],
) -> AdminOverview {
    AdminOverview {
        total_patients: patients.len(),
        total_staff: staff.len(),
        doctors: staff.iter().filter(|u| u.is_doctor()).count(),
        pending_invoices: invoices
            .iter()
            .filter(|i| i.status == InvoiceStatus::Pending)
            .count(),
        open_labs: labs.iter().filter(|l| l.is_open()).count(),
        restock_items: inventory.iter().filter(|i| i.needs_restock()).count(),
        outstanding_amount: invoices
            .iter()
            .filter(|i| i.is_outstanding())
            .map(|i| i.amount)
            .sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::HospitalStore;

    #[test]
    fn test_overview_of_seed() {
        let store = HospitalStore::open_in_memory().unwrap();
        let overview = admin_overview(
            store.patients(),
            store.staff(),
            store.invoices(),
            store.labs(),
            store.inventory(),
        );

        assert_eq!(overview.total_patients, 10);
        assert_eq!(overview.total_staff, 50);
        assert_eq!(overview.doctors, 19);

        let expected_outstanding: f64 = store
            .invoices()
            .iter()
            .filter(|i| i.status != InvoiceStatus::Paid)
            .map(|i| i.amount)
            .sum();
        assert!((overview.outstanding_amount - expected_outstanding).abs() < 1e-9);
        assert!(overview.pending_invoices <= store.invoices().len());
        assert!(overview.open_labs > 0);
        assert!(overview.restock_items > 0);
    }
}
