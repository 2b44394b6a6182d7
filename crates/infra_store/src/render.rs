//! Plain-text statement rendering
//!
//! Document layout is out of scope for the engine, so the default renderer
//! emits a small fixed-width text statement. Anything richer, PDF included,
//! plugs in behind the same `StatementRenderer` port.

use domain_ledger::{StatementFigures, StatementRenderer};

/// Renders statement figures as a fixed-width text document
#[derive(Debug, Default, Clone)]
pub struct TextStatementRenderer;

impl TextStatementRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl StatementRenderer for TextStatementRenderer {
    fn render(&self, figures: &StatementFigures) -> Vec<u8> {
        let body = format!(
            "Statement for {tenant} - {period}\n\
             \n\
             Opening balance: {opening:>14}\n\
             Charges:         {charges:>14}\n\
             Payments:        {payments:>14}\n\
             Closing balance: {closing:>14}\n",
            tenant = figures.tenant_id,
            period = figures.period,
            opening = figures.opening_balance,
            charges = figures.charges,
            payments = figures.payments,
            closing = figures.closing_balance,
        );
        body.into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{Period, TenantId};
    use rust_decimal_macros::dec;

    fn figures() -> StatementFigures {
        StatementFigures {
            tenant_id: TenantId::new("T1").unwrap(),
            period: Period::new("2024-02").unwrap(),
            opening_balance: dec!(100),
            charges: dec!(50),
            payments: dec!(100),
            closing_balance: dec!(50),
        }
    }

    #[test]
    fn test_render_includes_heading_and_figures() {
        let rendered = String::from_utf8(TextStatementRenderer::new().render(&figures())).unwrap();
        assert!(rendered.starts_with("Statement for T1 - 2024-02"));
        assert!(rendered.contains("Closing balance:"));
        assert!(rendered.contains("50"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = TextStatementRenderer::new();
        assert_eq!(renderer.render(&figures()), renderer.render(&figures()));
    }
}
