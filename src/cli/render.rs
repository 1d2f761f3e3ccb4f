//! Plain-text rendering of tables and details.
//!
//! Every function returns a `String`; printing is left to the caller.

use farmdash::list::{ListState, LoadStatus};
use farmdash::model::{product_name, Action, Balance, BalanceTrend, Product, StatisticsReport};
use farmdash::query::{ListFilters, Pagination};

const EMPTY_PRODUCTS: &str = "لا توجد منتجات";
const EMPTY_ACTIONS: &str = "لا توجد إجراءات";

fn amount(value: f64) -> String {
    format!("{:.2}", value)
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    format!("{}{}", text, " ".repeat(width - len))
}

/// Renders rows as left-aligned columns sized to the widest cell.
fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let line = |cells: Vec<String>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| pad(c, *w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(line(headers.iter().map(|h| h.to_string()).collect()));
    out.push(line(widths.iter().map(|w| "-".repeat(*w)).collect()));
    for row in rows {
        out.push(line(row.clone()));
    }
    out.join("\n")
}

pub fn products_table(products: &[Product]) -> String {
    if products.is_empty() {
        return EMPTY_PRODUCTS.to_string();
    }
    let rows: Vec<Vec<String>> = products
        .iter()
        .map(|p| {
            vec![
                p.record_id.clone(),
                p.name.clone(),
                p.desc.clone().unwrap_or_default(),
                amount(p.amount),
            ]
        })
        .collect();
    table(&["ID", "الاسم", "الوصف", "الكمية"], &rows)
}

pub fn actions_table(actions: &[Action], products: &[Product]) -> String {
    if actions.is_empty() {
        return EMPTY_ACTIONS.to_string();
    }
    let rows: Vec<Vec<String>> = actions
        .iter()
        .map(|a| {
            let kind = match &a.type_desc {
                Some(desc) if !desc.is_empty() => format!("{} ({})", a.action_type.label(), desc),
                _ => a.action_type.label().to_string(),
            };
            vec![
                a.record_id.clone(),
                product_name(products, a.product.as_deref()).to_string(),
                kind,
                amount(a.amount),
                a.amount_type.label().to_string(),
                amount(a.income),
                amount(a.outcome),
                a.statement.clone(),
                date_only(&a.date).to_string(),
            ]
        })
        .collect();
    table(
        &[
            "ID", "المنتج", "الإجراء", "الكمية", "نوع الكمية", "وارد", "منصرف", "بيان", "التاريخ",
        ],
        &rows,
    )
}

pub fn action_detail(action: &Action, products: &[Product]) -> String {
    let mut lines = vec![format!("نوع الإجراء: {}", action.action_type.label())];
    if let Some(desc) = action.type_desc.as_deref().filter(|d| !d.is_empty()) {
        lines.push(format!("  {}", desc));
    }
    lines.push(format!("المنتج: {}", product_name(products, action.product.as_deref())));
    lines.push(format!("نوع الكمية: {}", action.amount_type.label()));
    lines.push(format!("الكمية: {}", amount(action.amount)));
    lines.push(format!("وارد: {}", amount(action.income)));
    lines.push(format!("منصرف: {}", amount(action.outcome)));
    if !action.statement.is_empty() {
        lines.push(format!("بيان: {}", action.statement));
    }
    lines.push(format!("الرصيد بعد الإجراء: {}", amount(action.running_balance)));
    lines.push(format!("التاريخ: {}", date_only(&action.date)));
    lines.join("\n")
}

pub fn product_detail(product: &Product) -> String {
    let mut lines = vec![
        format!("ID: {}", product.record_id),
        format!("الاسم: {}", product.name),
    ];
    if let Some(desc) = product.desc.as_deref().filter(|d| !d.is_empty()) {
        lines.push(format!("الوصف: {}", desc));
    }
    lines.push(format!("الكمية: {}", amount(product.amount)));
    lines.join("\n")
}

/// Pages shown on each side of the current one once the strip is elided.
const PAGE_WINDOW: u32 = 2;
/// Strips up to this many pages are printed in full.
const FULL_STRIP_PAGES: u32 = 9;

/// `‹ 1 [2] 3 ›`, with the current page bracketed.
pub fn pagination_strip(pagination: &Pagination) -> String {
    let count = pagination.page_count();
    let label = |p: u32| {
        if pagination.is_current(p) {
            format!("[{}]", p)
        } else {
            p.to_string()
        }
    };

    if count <= FULL_STRIP_PAGES {
        let pages: Vec<String> = pagination.pages().map(label).collect();
        return format!("‹ {} ›", pages.join(" "));
    }

    let current = pagination.current_page().clamp(1, count);
    let start = current.saturating_sub(PAGE_WINDOW).max(2);
    let end = current.saturating_add(PAGE_WINDOW).min(count - 1);

    let mut parts = vec![label(1)];
    if start > 2 {
        parts.push("…".to_string());
    }
    parts.extend((start..=end).map(label));
    if end < count - 1 {
        parts.push("…".to_string());
    }
    parts.push(label(count));
    format!("‹ {} ›", parts.join(" "))
}

/// Table, then pagination and count, then load status when not ready.
pub fn list_view<F: ListFilters, T>(
    state: &ListState<F, T>,
    body: String,
    count_label: &str,
) -> String {
    let mut out = vec![body];
    out.push(format!(
        "{}   {}: {}",
        pagination_strip(&state.pagination()),
        count_label,
        state.total_items
    ));
    if let LoadStatus::Failed { message } = &state.status {
        out.push(format!("(تعذر التحميل: {})", message));
    }
    out.join("\n")
}

pub fn balance_line(balance: &Balance) -> String {
    let marker = match balance.trend() {
        BalanceTrend::Positive => "▲",
        BalanceTrend::Negative => "▼",
        BalanceTrend::Zero => "■",
    };
    format!("الرصيد الحالي: {} {} EGP", marker, amount(balance.balance))
}

pub fn statistics(report: &StatisticsReport) -> String {
    let rows: Vec<Vec<String>> = report
        .statistics
        .iter()
        .map(|item| {
            vec![
                item.product_name
                    .clone()
                    .unwrap_or_else(|| "-".to_string()),
                amount(item.total_income),
                amount(item.total_outcome),
                amount(item.net_amount),
                item.count.to_string(),
            ]
        })
        .collect();

    let summary = &report.summary;
    format!(
        "{}\n\nالإجمالي: {} إجراء  وارد {}  منصرف {}  الصافي {}",
        table(&["المنتج", "إجمالي الوارد", "إجمالي المنصرف", "الصافي", "العدد"], &rows),
        summary.total_count,
        amount(summary.total_income),
        amount(summary.total_outcome),
        amount(summary.net_amount),
    )
}

/// `2024-03-01T00:00:00.000Z` → `2024-03-01`.
fn date_only(date: &str) -> &str {
    date.split('T').next().unwrap_or(date)
}
