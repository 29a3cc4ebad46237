use mostrador_core::FlowStage;

/// Screen regions the controller addresses independently. Each keeps its own
/// loading and error surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Products,
    Orders,
    CreateProduct,
    OrderForm,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Products => "Productos",
            Self::Orders => "Órdenes",
            Self::CreateProduct => "Nuevo producto",
            Self::OrderForm => "Nueva orden",
        }
    }
}

/// One entry of the product selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorOption {
    pub id: i64,
    pub label: String,
}

/// One fully resolved row of the order table. Monetary columns arrive already
/// formatted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderRow {
    pub id: String,
    pub product: String,
    pub quantity: String,
    pub subtotal: String,
    pub shipping: String,
    pub total: String,
    pub status: String,
}

/// The confirmation panel shown after a placed order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderResult {
    pub id: String,
    pub status: String,
    pub subtotal: String,
    pub shipping: String,
    pub total: String,
    pub raw: String,
}

/// Rendering seam between the controller and whatever draws the screen.
/// Production uses [`TerminalView`]; tests record the calls.
pub trait View {
    fn loading(&mut self, section: Section);
    fn loaded(&mut self, section: Section);
    fn error(&mut self, section: Section, message: &str);
    fn notice(&mut self, message: &str);
    fn empty(&mut self, section: Section);
    fn products(&mut self, products: &[mostrador_core::Product]);
    fn selector(&mut self, options: &[SelectorOption], selected: Option<i64>);
    fn orders(&mut self, rows: &[OrderRow]);
    fn order_result(&mut self, result: &OrderResult);
    fn flow(&mut self, stage: Option<FlowStage>);
    fn reset_form(&mut self, section: Section);
}

/// Line-oriented renderer for one-shot terminal invocations.
#[derive(Debug, Default)]
pub struct TerminalView {
    lines: Vec<String>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_output(self) -> String {
        self.lines.join("\n")
    }

    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}

impl View for TerminalView {
    fn loading(&mut self, _section: Section) {}

    fn loaded(&mut self, _section: Section) {}

    fn error(&mut self, _section: Section, message: &str) {
        self.push(message);
    }

    fn notice(&mut self, message: &str) {
        self.push(message);
    }

    fn empty(&mut self, section: Section) {
        match section {
            Section::Products => self.push("No hay productos."),
            Section::Orders => self.push("No hay órdenes."),
            _ => {}
        }
    }

    fn products(&mut self, products: &[mostrador_core::Product]) {
        self.push(format!("{}:", Section::Products.title()));
        for product in products {
            let stock = product.stock.map(|stock| stock.to_string()).unwrap_or_else(|| "-".into());
            self.push(format!(
                "  #{} {} {} (stock: {stock})",
                product.id,
                product.display_name(),
                mostrador_core::format_money(product.price),
            ));
        }
    }

    fn selector(&mut self, options: &[SelectorOption], selected: Option<i64>) {
        if selected.is_none() {
            self.push("Seleccione un producto");
        }
        for option in options {
            let marker = if selected == Some(option.id) { ">" } else { " " };
            self.push(format!("{marker} [{}] {}", option.id, option.label));
        }
    }

    fn orders(&mut self, rows: &[OrderRow]) {
        self.push(format!("{}:", Section::Orders.title()));
        for row in rows {
            self.push(format!(
                "  {} {} x{} {} {} {} {}",
                row.id, row.product, row.quantity, row.subtotal, row.shipping, row.total, row.status,
            ));
        }
    }

    fn order_result(&mut self, result: &OrderResult) {
        self.push(format!(
            "{} {} {} {} {}",
            result.id, result.status, result.subtotal, result.shipping, result.total,
        ));
    }

    fn flow(&mut self, stage: Option<FlowStage>) {
        let Some(stage) = stage else {
            return;
        };
        let rendered: Vec<String> = FlowStage::ALL
            .iter()
            .map(|step| {
                if *step <= stage {
                    format!("[{}]", step.label())
                } else {
                    format!(" {} ", step.label())
                }
            })
            .collect();
        self.push(rendered.join(" → "));
    }

    fn reset_form(&mut self, _section: Section) {}
}
