use serde::Serialize;

use crate::domain::role::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProductColumn {
    Article,
    Name,
    Category,
    Brand,
    Supplier,
    Price,
    Quantity,
    Discount,
    Description,
    Actions,
}

impl ProductColumn {
    pub fn header(self) -> &'static str {
        match self {
            ProductColumn::Article => "Article",
            ProductColumn::Name => "Name",
            ProductColumn::Category => "Category",
            ProductColumn::Brand => "Brand",
            ProductColumn::Supplier => "Supplier",
            ProductColumn::Price => "Price",
            ProductColumn::Quantity => "Quantity",
            ProductColumn::Discount => "Discount %",
            ProductColumn::Description => "Description",
            ProductColumn::Actions => "Actions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrderColumn {
    ReceiptCode,
    Status,
    PickupPoint,
    OrderDate,
    DeliveryDate,
    Client,
    Actions,
}

impl OrderColumn {
    pub fn header(self) -> &'static str {
        match self {
            OrderColumn::ReceiptCode => "Receipt",
            OrderColumn::Status => "Status",
            OrderColumn::PickupPoint => "Pickup point",
            OrderColumn::OrderDate => "Order date",
            OrderColumn::DeliveryDate => "Delivery date",
            OrderColumn::Client => "Client",
            OrderColumn::Actions => "Actions",
        }
    }
}

/// What a role may do beyond browsing the product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Capability {
    /// Search, filter and sort lists.
    Filter,
    ViewOrders,
    ManageProducts,
    ManageOrders,
    ManageUsers,
}

/// Per-row affordance shown in an actions column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RowAction {
    Edit,
    Delete,
}

impl RowAction {
    pub fn label(self) -> &'static str {
        match self {
            RowAction::Edit => "edit",
            RowAction::Delete => "delete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewSchema {
    pub product_columns: &'static [ProductColumn],
    pub order_columns: &'static [OrderColumn],
    pub capabilities: &'static [Capability],
    pub row_actions: &'static [RowAction],
}

impl ViewSchema {
    pub fn allows(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }
}

const ADMIN_PRODUCT_COLUMNS: &[ProductColumn] = &[
    ProductColumn::Article,
    ProductColumn::Name,
    ProductColumn::Category,
    ProductColumn::Brand,
    ProductColumn::Supplier,
    ProductColumn::Price,
    ProductColumn::Quantity,
    ProductColumn::Discount,
    ProductColumn::Description,
    ProductColumn::Actions,
];

const READER_PRODUCT_COLUMNS: &[ProductColumn] = &[
    ProductColumn::Article,
    ProductColumn::Name,
    ProductColumn::Category,
    ProductColumn::Brand,
    ProductColumn::Price,
    ProductColumn::Quantity,
    ProductColumn::Discount,
    ProductColumn::Description,
];

const ADMIN_ORDER_COLUMNS: &[OrderColumn] = &[
    OrderColumn::ReceiptCode,
    OrderColumn::Status,
    OrderColumn::PickupPoint,
    OrderColumn::OrderDate,
    OrderColumn::DeliveryDate,
    OrderColumn::Client,
    OrderColumn::Actions,
];

const MANAGER_ORDER_COLUMNS: &[OrderColumn] = &[
    OrderColumn::ReceiptCode,
    OrderColumn::Status,
    OrderColumn::PickupPoint,
    OrderColumn::OrderDate,
    OrderColumn::DeliveryDate,
];

static ADMINISTRATOR: ViewSchema = ViewSchema {
    product_columns: ADMIN_PRODUCT_COLUMNS,
    order_columns: ADMIN_ORDER_COLUMNS,
    capabilities: &[
        Capability::Filter,
        Capability::ViewOrders,
        Capability::ManageProducts,
        Capability::ManageOrders,
        Capability::ManageUsers,
    ],
    row_actions: &[RowAction::Edit, RowAction::Delete],
};

static MANAGER: ViewSchema = ViewSchema {
    product_columns: READER_PRODUCT_COLUMNS,
    order_columns: MANAGER_ORDER_COLUMNS,
    capabilities: &[Capability::Filter, Capability::ViewOrders],
    row_actions: &[],
};

static BROWSER: ViewSchema = ViewSchema {
    product_columns: READER_PRODUCT_COLUMNS,
    order_columns: &[],
    capabilities: &[],
    row_actions: &[],
};

impl Role {
    pub fn view_schema(self) -> &'static ViewSchema {
        match self {
            Role::Administrator => &ADMINISTRATOR,
            Role::Manager => &MANAGER,
            Role::Client | Role::Guest => &BROWSER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_administrator_sees_supplier_and_actions() {
        for role in Role::ALL {
            let columns = role.view_schema().product_columns;
            let admin = role == Role::Administrator;
            assert_eq!(columns.contains(&ProductColumn::Supplier), admin, "{role}");
            assert_eq!(columns.contains(&ProductColumn::Actions), admin, "{role}");
            assert_eq!(columns.len(), if admin { 10 } else { 8 }, "{role}");
        }
    }

    #[test]
    fn only_administrator_has_row_actions() {
        assert_eq!(
            Role::Administrator.view_schema().row_actions,
            &[RowAction::Edit, RowAction::Delete]
        );
        for role in [Role::Manager, Role::Client, Role::Guest] {
            assert!(role.view_schema().row_actions.is_empty(), "{role}");
        }
    }

    #[test]
    fn capabilities_by_role() {
        let cases = [
            (Role::Administrator, Capability::ManageProducts, true),
            (Role::Administrator, Capability::Filter, true),
            (Role::Manager, Capability::Filter, true),
            (Role::Manager, Capability::ViewOrders, true),
            (Role::Manager, Capability::ManageOrders, false),
            (Role::Client, Capability::Filter, false),
            (Role::Client, Capability::ViewOrders, false),
            (Role::Guest, Capability::ManageProducts, false),
        ];
        for (role, capability, expected) in cases {
            assert_eq!(role.view_schema().allows(capability), expected, "{role} {capability:?}");
        }
    }

    #[test]
    fn order_columns_by_role() {
        assert_eq!(Role::Administrator.view_schema().order_columns.len(), 7);
        assert_eq!(Role::Manager.view_schema().order_columns.len(), 5);
        assert!(!Role::Manager
            .view_schema()
            .order_columns
            .contains(&OrderColumn::Client));
        assert!(Role::Guest.view_schema().order_columns.is_empty());
    }
}
