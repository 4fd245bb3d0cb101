use crate::{admin, sea_orm_active_enums::AdminRole};

pub trait AdminPermissionTrait {
    /// SuperAdmin passes every check.
    fn has_any_role(&self, allowed_roles: &[AdminRole]) -> bool;
}

impl AdminPermissionTrait for admin::Model {
    fn has_any_role(&self, allowed_roles: &[AdminRole]) -> bool {
        self.role == AdminRole::SuperAdmin || allowed_roles.contains(&self.role)
    }
}
