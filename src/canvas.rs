use crate::core::{DrawSurface, Rgba, Visual, VisualKind};
use crate::dom;
use crate::frame::{self, FrameLoop, LoopControl};
use crate::guard::{EventListenerGuard, Teardown};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `DrawSurface` over a real 2D context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }
    fn save(&mut self) {
        self.ctx.save();
    }
    fn restore(&mut self) {
        self.ctx.restore();
    }
    fn translate(&mut self, x: f64, y: f64) {
        _ = self.ctx.translate(x, y);
    }
    fn rotate(&mut self, radians: f64) {
        _ = self.ctx.rotate(radians);
    }
    fn set_fill(&mut self, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_string());
    }
    fn set_stroke(&mut self, color: Rgba, line_width: f64) {
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(line_width);
    }
    fn set_shadow(&mut self, blur: f64, color: Rgba) {
        self.ctx.set_shadow_blur(blur);
        self.ctx.set_shadow_color(&color.to_string());
    }
    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.fill_rect(x, y, width, height);
    }
    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }
    fn arc(&mut self, cx: f64, cy: f64, radius: f64) {
        _ = self.ctx.arc(cx, cy, radius.max(0.0), 0.0, TAU);
    }
    fn stroke(&mut self) {
        self.ctx.stroke();
    }
    fn fill(&mut self) {
        self.ctx.fill();
    }
    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        _ = self.ctx.fill_text(text, x, y);
    }
}

fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// A visual running on one canvas.
pub struct VisualHandle {
    frames: Option<FrameLoop>,
    resize: Option<EventListenerGuard>,
}

impl Teardown for VisualHandle {
    fn teardown(&mut self) {
        if let Some(mut frames) = self.frames.take() {
            frames.teardown();
        }
        if let Some(mut resize) = self.resize.take() {
            resize.teardown();
        }
    }
}

impl Drop for VisualHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Start `kind` on `canvas`, reading `progress` every frame. Decorative
/// elements are seeded fresh on every mount.
pub fn mount_visual(
    canvas: &web::HtmlCanvasElement,
    kind: VisualKind,
    progress: Rc<Cell<f64>>,
) -> anyhow::Result<VisualHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let ctx = context_2d(canvas)?;
    let (w, h) = dom::sync_canvas_backing_size(canvas, &ctx);
    let visual = Rc::new(RefCell::new(Visual::<StdRng>::new(
        kind,
        StdRng::from_entropy(),
        w,
        h,
    )));

    let visual_resize = visual.clone();
    let canvas_resize = canvas.clone();
    let ctx_resize = ctx.clone();
    let resize = EventListenerGuard::passive(&window, "resize", move |_| {
        let (w, h) = dom::sync_canvas_backing_size(&canvas_resize, &ctx_resize);
        visual_resize.borrow_mut().resize(w, h);
    });

    let mut surface = CanvasSurface::new(ctx);
    let frames = frame::start_loop(move |dt| {
        visual.borrow_mut().draw(&mut surface, progress.get(), dt);
        LoopControl::Continue
    });
    if frames.is_none() {
        log::info!("[canvas] animation frames unavailable, {:?} visual stays blank", kind);
    } else {
        log::debug!("[canvas] {:?} visual running", kind);
    }

    Ok(VisualHandle { frames, resize })
}
