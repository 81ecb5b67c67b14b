use std::f64::consts::{FRAC_PI_2, TAU};

use leptos::{ev, html, prelude::*};
use leptos_use::{
    use_event_listener, use_raf_fn_with_options, use_window, utils::Pausable, UseRafFnOptions,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::particles::{ButterflySwarm, ParticleSystem, StarTrail, Starfield, Viewport};

use super::use_theme;

const LINK_DISTANCE: f64 = 110.0;

/// Draws a particle system's current frame. The canvas is already cleared.
pub trait Paint {
    fn paint(&self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue>;
}

/// Drives `system` on the canvas behind `canvas_ref`: seeds it once the canvas
/// is mounted, ticks and paints it every animation frame, and keeps it sized to
/// the window. The frame loop is cancelled when the owning component unmounts.
///
/// If the 2D context is unavailable nothing is drawn and no loop is started.
pub fn use_particle_canvas<S>(
    canvas_ref: NodeRef<html::Canvas>,
    system: S,
) -> StoredValue<S, LocalStorage>
where
    S: ParticleSystem + Paint + 'static,
{
    let system = StoredValue::new_local(system);
    let context = StoredValue::new_local(None::<CanvasRenderingContext2d>);
    let viewport = StoredValue::new(Viewport::default());

    let Pausable { resume, .. } = use_raf_fn_with_options(
        move |_| {
            // a frame queued before unmount finds everything disposed and does nothing
            context.try_with_value(|ctx| {
                let Some(ctx) = ctx else {
                    return;
                };
                let Some(vp) = viewport.try_get_value() else {
                    return;
                };
                system.try_update_value(|s| s.tick(vp));
                ctx.clear_rect(0.0, 0.0, vp.width, vp.height);
                if let Some(Err(err)) = system.try_with_value(|s| s.paint(ctx)) {
                    log::debug!("canvas paint failed: {err:?}");
                }
                ctx.set_global_alpha(1.0);
                ctx.set_shadow_blur(0.0);
            });
        },
        UseRafFnOptions::default().immediate(false),
    );

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let ctx = match canvas.get_context("2d") {
            Ok(Some(obj)) => obj.dyn_into::<CanvasRenderingContext2d>().ok(),
            _ => None,
        };
        let Some(ctx) = ctx else {
            log::warn!("2d canvas context unavailable, skipping animation");
            return;
        };
        let vp = fit_to_window(&canvas);
        viewport.set_value(vp);
        system.update_value(|s| s.seed(vp));
        context.set_value(Some(ctx));
        resume();
    });

    let _ = use_event_listener(use_window(), ev::resize, move |_| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let vp = fit_to_window(&canvas);
        viewport.set_value(vp);
        system.update_value(|s| s.resize(vp));
    });

    on_cleanup(move || {
        context.try_update_value(|ctx| *ctx = None);
    });

    system
}

fn fit_to_window(canvas: &HtmlCanvasElement) -> Viewport {
    let window = window();
    let px = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let vp = Viewport::new(px(window.inner_width()), px(window.inner_height()));
    canvas.set_width(vp.width as u32);
    canvas.set_height(vp.height as u32);
    vp
}

/// Soft radial glow from `color` at the centre to transparent at `radius`.
fn glow(
    ctx: &CanvasRenderingContext2d,
    x: f64,
    y: f64,
    radius: f64,
    color: &str,
) -> Result<(), JsValue> {
    let gradient = ctx.create_radial_gradient(x, y, 0.0, x, y, radius.max(0.1))?;
    gradient.add_color_stop(0.0, color)?;
    gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)")?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    Ok(())
}

impl Paint for ButterflySwarm {
    fn paint(&self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        for b in self.butterflies() {
            ctx.set_fill_style_str(b.color);
            for point in &b.trail {
                ctx.set_global_alpha(point.opacity * b.opacity);
                ctx.begin_path();
                ctx.arc(point.x, point.y, 1.5, 0.0, TAU)?;
                ctx.fill();
            }

            ctx.save();
            ctx.translate(b.x, b.y)?;
            ctx.rotate(b.direction + FRAC_PI_2)?;
            ctx.set_global_alpha(b.opacity);
            ctx.set_shadow_color(b.color);
            ctx.set_shadow_blur(15.0);

            let wing = b.wing_offset();
            let s = b.size;
            for side in [-1.0, 1.0] {
                glow(ctx, side * s * 0.3, -s * 0.15, s * 0.45, b.color)?;
                ctx.begin_path();
                ctx.ellipse(
                    side * s * 0.3,
                    -s * 0.15,
                    s * 0.32,
                    s * 0.22,
                    side * (0.4 + wing),
                    0.0,
                    TAU,
                )?;
                ctx.fill();

                glow(ctx, side * s * 0.22, s * 0.2, s * 0.3, b.color)?;
                ctx.begin_path();
                ctx.ellipse(
                    side * s * 0.22,
                    s * 0.2,
                    s * 0.2,
                    s * 0.15,
                    side * (0.8 + wing),
                    0.0,
                    TAU,
                )?;
                ctx.fill();
            }

            ctx.set_shadow_blur(0.0);
            ctx.set_fill_style_str("rgba(60, 60, 60, 0.8)");
            ctx.begin_path();
            ctx.ellipse(0.0, 0.0, s * 0.05, s * 0.3, 0.0, 0.0, TAU)?;
            ctx.fill();
            ctx.restore();
        }
        Ok(())
    }
}

impl Paint for StarTrail {
    fn paint(&self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        for star in self.stars() {
            let radius = star.radius();
            ctx.set_global_alpha(star.opacity);
            ctx.set_shadow_color(star.color);
            ctx.set_shadow_blur(radius * 3.0);
            glow(ctx, star.x, star.y, radius * 2.0, star.color)?;
            ctx.begin_path();
            ctx.arc(star.x, star.y, radius * 2.0, 0.0, TAU)?;
            ctx.fill();

            ctx.set_fill_style_str(star.color);
            ctx.begin_path();
            ctx.arc(star.x, star.y, radius * 0.6, 0.0, TAU)?;
            ctx.fill();
        }
        Ok(())
    }
}

impl Paint for Starfield {
    fn paint(&self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        ctx.set_line_width(0.5);
        for (a, b, strength) in self.links(LINK_DISTANCE) {
            ctx.set_global_alpha(strength * 0.25);
            ctx.set_stroke_style_str(a.color);
            ctx.begin_path();
            ctx.move_to(a.x, a.y);
            ctx.line_to(b.x, b.y);
            ctx.stroke();
        }
        for star in self.stars() {
            ctx.set_global_alpha(star.opacity);
            ctx.set_fill_style_str(star.color);
            ctx.begin_path();
            ctx.arc(star.x, star.y, star.radius, 0.0, TAU)?;
            ctx.fill();
        }
        Ok(())
    }
}

#[component]
pub fn ButterflyBackground() -> impl IntoView {
    let theme = use_theme();
    let canvas_ref = NodeRef::<html::Canvas>::new();
    use_particle_canvas(canvas_ref, ButterflySwarm::new());

    view! {
        <canvas
            node_ref=canvas_ref
            aria-hidden="true"
            class=move || {
                format!(
                    "fixed inset-0 w-full h-full pointer-events-none z-[1] {}",
                    theme.get().blend_class(),
                )
            }
        />
    }
}

#[component]
pub fn CursorStars() -> impl IntoView {
    let theme = use_theme();
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let trail = use_particle_canvas(
        canvas_ref,
        StarTrail::new(theme.get_untracked().star_palette()),
    );

    Effect::watch(
        move || theme.get(),
        move |theme, _, _| trail.update_value(|t| t.set_palette(theme.star_palette())),
        false,
    );

    let _ = use_event_listener(use_window(), ev::mousemove, move |event| {
        trail.update_value(|t| {
            t.spawn(f64::from(event.client_x()), f64::from(event.client_y()));
        });
    });

    view! {
        <canvas
            node_ref=canvas_ref
            aria-hidden="true"
            class=move || {
                format!(
                    "fixed inset-0 w-full h-full pointer-events-none z-50 {}",
                    theme.get().blend_class(),
                )
            }
        />
    }
}

#[component]
pub fn StarfieldBackground() -> impl IntoView {
    let theme = use_theme();
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let field = use_particle_canvas(
        canvas_ref,
        Starfield::new(theme.get_untracked().field_palette()),
    );

    Effect::watch(
        move || theme.get(),
        move |theme, _, _| field.update_value(|f| f.set_palette(theme.field_palette())),
        false,
    );

    view! {
        <canvas
            node_ref=canvas_ref
            aria-hidden="true"
            class="fixed inset-0 w-full h-full pointer-events-none z-0 opacity-60"
        />
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos::reactive::owner::Owner;

    use super::*;
    use crate::theme::Theme;

    #[test]
    fn test_particle_state_released_with_owner() {
        let owner = Owner::new();
        let trail = owner.with(|| {
            let canvas_ref = NodeRef::<html::Canvas>::new();
            let trail =
                use_particle_canvas(canvas_ref, StarTrail::new(Theme::Dark.star_palette()));
            trail.update_value(|t| t.spawn(10.0, 10.0));
            trail
        });
        assert!(trail.try_with_value(|t| t.stars().count()).is_some());

        owner.cleanup();
        assert_eq!(trail.try_with_value(|t| t.stars().count()), None);
    }
}
