//! Canvas rendering for the constellation.
//!
//! One pass per frame: clear, fill every particle as a translucent disc,
//! then stroke the proximity links with distance-faded alpha. All drawing is
//! best-effort; fallible canvas calls are discarded.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::theme::ConstellationStyle;

use super::field::ParticleField;

/// Renders the complete field to the canvas.
pub fn render(field: &ParticleField, ctx: &CanvasRenderingContext2d, style: &ConstellationStyle) {
	ctx.clear_rect(0.0, 0.0, field.width(), field.height());

	draw_particles(field, ctx, style);
	draw_links(field, ctx, style);
}

fn draw_particles(
	field: &ParticleField,
	ctx: &CanvasRenderingContext2d,
	style: &ConstellationStyle,
) {
	ctx.set_fill_style_str(&style.particle.to_css());
	for p in field.particles() {
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.size, 0.0, PI * 2.0);
		ctx.fill();
	}
}

fn draw_links(field: &ParticleField, ctx: &CanvasRenderingContext2d, style: &ConstellationStyle) {
	let link = style.link;
	let cap = style.link_alpha;

	ctx.set_line_width(1.0);
	field.visit_connections(|a, b, strength| {
		ctx.set_stroke_style_str(&link.with_alpha(strength * cap).to_css());
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();
	});
}
