//! Decorative particles: the cursor trail and the confetti burst.
//!
//! Particle generation is plain data so it can be driven by any `Rng`;
//! `spawn` is the only part that touches the DOM.

use rand::Rng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use crate::timers::{BrowserScheduler, Scheduler};
use crate::utils::px;

pub const TRAIL_GLYPHS: [&str; 7] = ["₿", "🚀", "💎", "🌙", "💰", "Ξ", "📈"];
pub const CONFETTI_GLYPHS: [&str; 3] = ["🎉", "✉️", "🚀"];

pub const LIFETIME_MS: u32 = 1000;
pub const TRAIL_INTERVAL_MS: f64 = 50.0;
pub const CONFETTI_COUNT: usize = 30;
pub const PARTICLE_CLASS: &str = "cursor-particle";

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub glyph: &'static str,
    pub x: f64,
    pub y: f64,
    /// Horizontal drift picked up by the CSS animation through `--tx`.
    pub tx: f64,
    /// Vertical drift, `--ty`.
    pub ty: f64,
}

fn pick<R: Rng + ?Sized>(palette: &[&'static str], rng: &mut R) -> &'static str {
    palette[rng.gen_range(0..palette.len())]
}

impl Particle {
    /// Trail particle: drifts sideways by up to 25px and falls 20 to 70px.
    pub fn trail<R: Rng + ?Sized>(x: f64, y: f64, rng: &mut R) -> Self {
        Self {
            glyph: pick(&TRAIL_GLYPHS, rng),
            x,
            y,
            tx: (rng.gen::<f64>() - 0.5) * 50.0,
            ty: 20.0 + rng.gen::<f64>() * 50.0,
        }
    }

    /// Confetti particle: scatters up to 50px in any direction.
    pub fn confetti<R: Rng + ?Sized>(x: f64, y: f64, rng: &mut R) -> Self {
        Self {
            glyph: pick(&CONFETTI_GLYPHS, rng),
            x,
            y,
            tx: (rng.gen::<f64>() - 0.5) * 100.0,
            ty: (rng.gen::<f64>() - 0.5) * 100.0,
        }
    }
}

pub fn confetti_burst<R: Rng + ?Sized>(x: f64, y: f64, rng: &mut R) -> Vec<Particle> {
    (0..CONFETTI_COUNT)
        .map(|_| Particle::confetti(x, y, rng))
        .collect()
}

/// Admits at most one event per `interval_ms` of wall clock.
#[derive(Clone, Debug)]
pub struct Throttle {
    interval_ms: f64,
    last: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self { interval_ms, last: None }
    }

    pub fn admit(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last {
            if now_ms - last < self.interval_ms {
                return false;
            }
        }
        self.last = Some(now_ms);
        true
    }
}

/// Appends the particle to `<body>` and removes it again after `LIFETIME_MS`.
pub fn spawn(document: &Document, particle: &Particle) -> Result<(), JsValue> {
    spawn_with(&BrowserScheduler, document, particle)
}

pub fn spawn_with<S: Scheduler>(
    scheduler: &S,
    document: &Document,
    particle: &Particle,
) -> Result<(), JsValue> {
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    let element = document.create_element("span")?;
    element.class_list().add_1(PARTICLE_CLASS)?;
    element.set_text_content(Some(particle.glyph));

    let element: HtmlElement = element.dyn_into()?;
    let style = element.style();
    style.set_property("left", &px(particle.x))?;
    style.set_property("top", &px(particle.y))?;
    style.set_property("--tx", &px(particle.tx))?;
    style.set_property("--ty", &px(particle.ty))?;

    body.append_child(&element)?;
    scheduler.schedule(LIFETIME_MS, Box::new(move || element.remove()));
    Ok(())
}
