//! Fixed sample data loaded at process start

use uuid::{Uuid, uuid};

use crate::models::{Employee, Role};

const ADMIN_ROLE_ID: Uuid = uuid!("53729686-a368-4e43-9f91-a237f982de6b");
const PARTNER_MANAGER_ROLE_ID: Uuid = uuid!("b0ae7aac-5493-45cd-ad16-87426a5e7665");

/// Roles available at startup
pub fn roles() -> Vec<Role> {
    vec![
        Role {
            id: ADMIN_ROLE_ID,
            name: "Admin".to_string(),
            description: "Full access to the system".to_string(),
        },
        Role {
            id: PARTNER_MANAGER_ROLE_ID,
            name: "PartnerManager".to_string(),
            description: "Manages partner promo code campaigns".to_string(),
        },
    ]
}

/// Employees available at startup, one per seeded role
pub fn employees(roles: &[Role]) -> Vec<Employee> {
    let role_named = |name: &str| {
        roles
            .iter()
            .filter(|role| role.name == name)
            .cloned()
            .collect::<Vec<_>>()
    };

    vec![
        Employee {
            id: uuid!("451533d5-d8d5-4a11-9c7b-eb9f14e1a32f"),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "owner@somemail.com".to_string(),
            roles: role_named("Admin"),
            applied_promocodes_count: 5,
        },
        Employee {
            id: uuid!("f766e2bf-340a-46ea-bff3-f1700b435895"),
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            email: "jane.smith@somemail.com".to_string(),
            roles: role_named("PartnerManager"),
            applied_promocodes_count: 10,
        },
    ]
}
