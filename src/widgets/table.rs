//! Table: the cell-based container.

use std::any::Any;

use crate::geometry::Spacing;
use crate::tree::NodeId;
use crate::widget::{Builder, CellSettings, ContainerKind, Widget};

/// One occupied layout cell.
#[derive(Clone, Debug)]
pub struct TableCell {
    pub child: NodeId,
    pub settings: CellSettings,
}

/// A container that lays children out in rows of cells.
///
/// Row and column counts are computed once, by [`Widget::pack`], from the
/// recorded cell settings (`end_row`, `colspan`).
#[derive(Debug, Clone, Default)]
pub struct Table {
    style: String,
    padding: Spacing,
    cells: Vec<TableCell>,
    rows: usize,
    columns: usize,
}

impl Table {
    pub fn from_builder(builder: &Builder) -> Self {
        Self {
            style: builder.style().to_string(),
            ..Self::default()
        }
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn padding(&self) -> Spacing {
        self.padding
    }

    pub fn cells(&self) -> &[TableCell] {
        &self.cells
    }

    /// Row count, valid after pack.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count (widest row in spanned columns), valid after pack.
    pub fn columns(&self) -> usize {
        self.columns
    }
}

impl Widget for Table {
    fn widget_type(&self) -> &str {
        "Table"
    }

    fn container(&self) -> Option<ContainerKind> {
        Some(ContainerKind::Table)
    }

    fn add_cell(&mut self, child: NodeId, settings: CellSettings) {
        self.cells.push(TableCell { child, settings });
    }

    fn set_padding(&mut self, pad: Spacing) -> bool {
        self.padding = pad;
        true
    }

    fn pack(&mut self) {
        self.rows = 0;
        self.columns = 0;
        let mut width = 0usize;
        for cell in &self.cells {
            width += cell.settings.colspan.max(1) as usize;
            if cell.settings.end_row {
                self.rows += 1;
                self.columns = self.columns.max(width);
                width = 0;
            }
        }
        if width > 0 {
            self.rows += 1;
            self.columns = self.columns.max(width);
        }
    }

    fn summary(&self) -> Option<String> {
        Some(format!("{}x{}", self.rows, self.columns))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::WidgetTree;
    use crate::widgets::Label;

    fn cell(end_row: bool, colspan: u32) -> CellSettings {
        CellSettings {
            end_row,
            colspan,
            ..CellSettings::default()
        }
    }

    #[test]
    fn pack_counts_rows_and_columns() {
        let mut tree = WidgetTree::new();
        let a = tree.insert(Box::new(Label::new("a")));
        let b = tree.insert(Box::new(Label::new("b")));
        let c = tree.insert(Box::new(Label::new("c")));

        let mut table = Table::default();
        table.add_cell(a, cell(false, 1));
        table.add_cell(b, cell(true, 1));
        table.add_cell(c, cell(false, 1));
        table.pack();

        assert_eq!(table.rows(), 2);
        assert_eq!(table.columns(), 2);
    }

    #[test]
    fn pack_respects_colspan() {
        let mut tree = WidgetTree::new();
        let a = tree.insert(Box::new(Label::new("a")));

        let mut table = Table::default();
        table.add_cell(a, cell(true, 3));
        table.pack();

        assert_eq!(table.rows(), 1);
        assert_eq!(table.columns(), 3);
    }

    #[test]
    fn empty_table_packs_to_zero() {
        let mut table = Table::default();
        table.pack();
        assert_eq!(table.rows(), 0);
        assert_eq!(table.columns(), 0);
    }
}
