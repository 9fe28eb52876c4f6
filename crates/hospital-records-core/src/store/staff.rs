//! Staff directory mutations.

use super::{HospitalStore, StoreError, StoreResult};
use crate::ids::{self, IdKind};
use crate::models::{NewStaffMember, StaffUpdate, User, UserRole};

impl HospitalStore {
    /// Register a doctor. The role is always DOCTOR.
    pub fn add_doctor(&mut self, new_doctor: NewStaffMember) -> StoreResult<User> {
        self.add_staff(new_doctor, UserRole::Doctor)
    }

    /// Register a staff member with the given role.
    ///
    /// Every staff id uses the `doc-` prefix regardless of role.
    pub fn add_staff(&mut self, new_member: NewStaffMember, role: UserRole) -> StoreResult<User> {
        let id = ids::timestamp_id(IdKind::Staff, self.clock.now());
        let user = new_member.into_user(id, role);

        let mut staff = self.staff.clone();
        staff.push(user.clone());
        self.commit_staff(staff)?;

        tracing::info!(id = %user.id, role = user.role.as_str(), "staff member added");
        Ok(user)
    }

    /// Shallow-merge `update` into the staff member with `id`.
    pub fn update_staff(&mut self, id: &str, update: StaffUpdate) -> StoreResult<User> {
        let mut staff = self.staff.clone();
        let member = staff
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| StoreError::not_found("staff member", id))?;
        update.apply(member);
        let updated = member.clone();

        self.commit_staff(staff)?;
        Ok(updated)
    }

    /// Remove a staff member. Appointments and patient assignments that
    /// reference them are left in place.
    pub fn delete_staff(&mut self, id: &str) -> StoreResult<()> {
        if !self.staff.iter().any(|u| u.id == id) {
            return Err(StoreError::not_found("staff member", id));
        }
        let staff = self.staff.iter().filter(|u| u.id != id).cloned().collect();
        self.commit_staff(staff)?;

        tracing::info!(id, "staff member deleted");
        Ok(())
    }
}
