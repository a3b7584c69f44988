// ============================================================================
// ORDER FORMATTER - Pedido → mensaje para el personal (función pura)
// ============================================================================

use std::borrow::Cow;
use crate::models::{CartLine, Order};
use crate::utils::i18n::{t, Language};

/// Formato de fecha local del mensaje (dd.mm.aaaa, hh:mm:ss)
const DATE_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";

/// Textos localizados del mensaje
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderLabels {
    pub header: String,
    pub table: String,
    pub dishes: String,
    pub total: String,
    pub date: String,
    pub currency: String,
}

impl OrderLabels {
    pub fn for_language(lang: Language) -> Self {
        Self {
            header: t("order_header", lang),
            table: t("order_table", lang),
            dishes: t("order_dishes", lang),
            total: t("order_total", lang),
            date: t("order_date", lang),
            currency: t("currency", lang),
        }
    }
}

/// Resultado del formateo
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormattedOrder {
    pub text: String,
    pub lines: Vec<String>,
    pub total: u64,
}

/// `<name> x<quantity>: <lineTotal> <currency>`
pub fn format_line(line: &CartLine, currency: &str) -> String {
    format!(
        "{} x{}: {} {}",
        escape_html(line.dish().name()),
        line.quantity(),
        line.line_total(),
        currency
    )
}

pub fn format_order(order: &Order, labels: &OrderLabels) -> FormattedOrder {
    let total: u64 = order.lines.iter().map(CartLine::line_total).sum();
    let lines: Vec<String> = order
        .lines
        .iter()
        .map(|line| format_line(line, &labels.currency))
        .collect();
    let items = lines
        .iter()
        .map(|line| format!("- {}", line))
        .collect::<Vec<_>>()
        .join("\n");

    let text = format!(
        "<b>🔔 {header}:</b>\n📍 {table_label}: {table}\n🍽️ {dishes}:\n{items}\n💰 {total_label}: {total} {currency}\n⌛ {date_label}: {date}",
        header = labels.header,
        table_label = labels.table,
        table = order.table,
        dishes = labels.dishes,
        items = items,
        total_label = labels.total,
        total = total,
        currency = labels.currency,
        date_label = labels.date,
        date = order.placed_at.format(DATE_FORMAT),
    );

    FormattedOrder { text, lines, total }
}

/// Escapa lo que el modo HTML del proveedor interpretaría como marcado
pub fn escape_html(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['&', '<', '>']) {
        return Cow::Borrowed(raw);
    }
    let mut escaped = String::with_capacity(raw.len() + 8);
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}
