//! Built-in attribute handlers.
//!
//! A representative catalog, not an exhaustive one: the long tail of
//! per-property handlers belongs to the host. These cover the engine-level
//! node flags plus the table-cell layout attributes that exercise both
//! dispatch scopes.

use crate::attribute::AttributeRegistry;
use crate::error::ParseError;
use crate::geometry::Spacing;
use crate::widget::Widget;

/// Register the built-in widget- and cell-scoped handlers.
pub fn register_defaults(registry: &mut AttributeRegistry) {
    // ── Widget scope ─────────────────────────────────────────────────

    registry.register_widget("id", |services, _tag, node, raw| {
        let id = services.parse_string(raw, Some(&*node.widget));
        node.id = Some(id);
        Ok(())
    });

    registry.register_widget("visible", |services, _tag, node, raw| {
        let visible = services.parse_bool(raw, Some(&*node.widget))?;
        node.visible = visible;
        Ok(())
    });

    registry.register_widget("disabled", |services, _tag, node, raw| {
        let disabled = services.parse_bool(raw, Some(&*node.widget))?;
        node.disabled = disabled;
        Ok(())
    });

    registry.register_widget("pad", |services, tag, node, raw| {
        let pad = services.parse_float(raw, Some(&*node.widget))?;
        if node.widget.set_padding(Spacing::all(pad)) {
            Ok(())
        } else {
            Err(ParseError::UnknownAttribute {
                tag: tag.to_string(),
                attribute: "pad".to_string(),
            })
        }
    });

    // ── Cell scope ───────────────────────────────────────────────────

    registry.register_cell("pad", |services, _tag, cell, widget, raw| {
        cell.pad = Spacing::all(services.parse_float(raw, Some(widget))?);
        Ok(())
    });

    registry.register_cell("padtop", |services, _tag, cell, widget, raw| {
        cell.pad.top = services.parse_float(raw, Some(widget))?;
        Ok(())
    });

    registry.register_cell("padbottom", |services, _tag, cell, widget, raw| {
        cell.pad.bottom = services.parse_float(raw, Some(widget))?;
        Ok(())
    });

    registry.register_cell("padleft", |services, _tag, cell, widget, raw| {
        cell.pad.left = services.parse_float(raw, Some(widget))?;
        Ok(())
    });

    registry.register_cell("padright", |services, _tag, cell, widget, raw| {
        cell.pad.right = services.parse_float(raw, Some(widget))?;
        Ok(())
    });

    registry.register_cell("align", |services, _tag, cell, widget, raw| {
        cell.align = services.parse_align(raw, Some(widget))?;
        Ok(())
    });

    registry.register_cell("colspan", |services, _tag, cell, widget, raw| {
        cell.colspan = services.parse_unsigned(raw, Some(widget))?.max(1);
        Ok(())
    });

    registry.register_cell("expand", |services, _tag, cell, widget, raw| {
        let expand = services.parse_bool(raw, Some(widget))?;
        cell.expand_x = expand;
        cell.expand_y = expand;
        Ok(())
    });

    registry.register_cell("fill", |services, _tag, cell, widget, raw| {
        let fill = services.parse_bool(raw, Some(widget))?;
        cell.fill_x = fill;
        cell.fill_y = fill;
        Ok(())
    });

    registry.register_cell("row", |services, _tag, cell, widget, raw| {
        cell.end_row = services.parse_bool(raw, Some(widget))?;
        Ok(())
    });
}
