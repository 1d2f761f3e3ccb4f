//! Wire types of the dashboard API.

mod action;
mod balance;
mod product;
mod statistics;

pub use action::{Action, ActionRequest, ActionResponse, ActionType, ActionsPage, AmountType};
pub use balance::{Balance, BalanceTrend};
pub use product::{
    product_name, Product, ProductPatch, ProductRequest, ProductResponse, ProductsPage,
    DELETED_PRODUCT, NO_PRODUCT,
};
pub use statistics::{
    Period, StatisticItem, StatisticsQuery, StatisticsReport, StatisticsSummary,
};
