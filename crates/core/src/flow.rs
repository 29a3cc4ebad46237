use serde::{Deserialize, Serialize};

/// The four visual stages of the select → order → ship → result indicator.
/// Ordering is significant: later stages compare greater.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowStage {
    ProductSelected,
    OrderPlaced,
    ShippingComputed,
    ResultShown,
}

impl FlowStage {
    pub const ALL: [FlowStage; 4] = [
        FlowStage::ProductSelected,
        FlowStage::OrderPlaced,
        FlowStage::ShippingComputed,
        FlowStage::ResultShown,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::ProductSelected => "Producto",
            Self::OrderPlaced => "Orden",
            Self::ShippingComputed => "Envío",
            Self::ResultShown => "Resultado",
        }
    }
}

/// Forward-only progress indicator. It never expires on its own; only a new
/// product selection rewinds it, and only to the first stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OrderFlow {
    stage: Option<FlowStage>,
}

impl OrderFlow {
    pub fn stage(&self) -> Option<FlowStage> {
        self.stage
    }

    /// A fresh selection always lands on the first stage, even from a later
    /// one. This is the sole reset path.
    pub fn select(&mut self) -> FlowStage {
        self.stage = Some(FlowStage::ProductSelected);
        FlowStage::ProductSelected
    }

    /// Moves to `target` when it lies ahead of the current stage; attempts
    /// to move backwards are ignored.
    pub fn advance(&mut self, target: FlowStage) -> Option<FlowStage> {
        match self.stage {
            Some(current) if target <= current => {}
            _ => self.stage = Some(target),
        }
        self.stage
    }

    /// Runs the indicator through to the final stage.
    pub fn complete(&mut self) -> Option<FlowStage> {
        self.advance(FlowStage::ResultShown)
    }
}

#[cfg(test)]
mod tests {
    use super::{FlowStage, OrderFlow};

    #[test]
    fn starts_with_no_stage() {
        assert_eq!(OrderFlow::default().stage(), None);
    }

    #[test]
    fn select_lands_on_first_stage() {
        let mut flow = OrderFlow::default();
        flow.select();
        assert_eq!(flow.stage(), Some(FlowStage::ProductSelected));
    }

    #[test]
    fn advance_is_forward_only() {
        let mut flow = OrderFlow::default();
        flow.select();
        flow.advance(FlowStage::ShippingComputed);
        assert_eq!(flow.stage(), Some(FlowStage::ShippingComputed));

        flow.advance(FlowStage::OrderPlaced);
        assert_eq!(flow.stage(), Some(FlowStage::ShippingComputed), "backwards moves are ignored");
    }

    #[test]
    fn select_rewinds_from_any_stage() {
        let mut flow = OrderFlow::default();
        flow.select();
        flow.complete();
        assert_eq!(flow.stage(), Some(FlowStage::ResultShown));

        flow.select();
        assert_eq!(flow.stage(), Some(FlowStage::ProductSelected));
    }

    #[test]
    fn complete_reaches_the_final_stage_from_anywhere() {
        let mut flow = OrderFlow::default();
        assert_eq!(flow.complete(), Some(FlowStage::ResultShown));
    }
}
