use std::cell::RefCell;
use std::rc::Rc;

use gtk::prelude::*;
use gtk4 as gtk;
use tracing::warn;

use crate::api::{ChartConfig, ChartEngine};
use crate::core::SampleSeries;
use crate::error::ChartResult;
use crate::render::CairoRenderer;

type SharedEngine = Rc<RefCell<ChartEngine<CairoRenderer>>>;

/// Hosts a chart inside a GTK `DrawingArea`.
///
/// The area's allocated width drives the responsive container. Mouse motion,
/// clicks and touch drags feed the tooltip, and every state change queues a
/// redraw that paints straight onto GTK's cairo context.
pub struct GtkChartAdapter {
    engine: SharedEngine,
    drawing_area: gtk::DrawingArea,
}

impl GtkChartAdapter {
    pub fn new(config: ChartConfig) -> ChartResult<Self> {
        let height = config.height;
        // Paints on GTK's context; the offscreen surface is never used.
        let renderer = CairoRenderer::new(1, 1)?;
        let engine: SharedEngine = Rc::new(RefCell::new(ChartEngine::new(renderer, config)?));

        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_height(height.round() as i32);
        drawing_area.set_hexpand(true);

        let adapter = Self {
            engine,
            drawing_area,
        };
        adapter.connect_draw();
        adapter.connect_resize();
        adapter.connect_pointer();
        adapter.connect_touch();
        Ok(adapter)
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    #[must_use]
    pub fn engine(&self) -> SharedEngine {
        Rc::clone(&self.engine)
    }

    pub fn set_samples(&self, series: SampleSeries) {
        self.engine.borrow_mut().set_samples(series);
        self.drawing_area.queue_draw();
    }

    fn connect_draw(&self) {
        let engine = Rc::clone(&self.engine);
        self.drawing_area
            .set_draw_func(move |_area, context, _width, _height| {
                if let Err(err) = engine.borrow_mut().render_on_cairo_context(context) {
                    warn!(error = %err, "chart draw failed");
                }
            });
    }

    fn connect_resize(&self) {
        let engine = Rc::clone(&self.engine);
        self.drawing_area.connect_resize(move |area, width, _height| {
            if engine.borrow_mut().observe_width(f64::from(width)) {
                area.queue_draw();
            }
        });
    }

    fn connect_pointer(&self) {
        let motion = gtk::EventControllerMotion::new();
        let engine = Rc::clone(&self.engine);
        let area = self.drawing_area.downgrade();
        motion.connect_motion(move |_, x, y| {
            if engine.borrow_mut().pointer_move(x, y) {
                queue_draw(&area);
            }
        });
        let engine = Rc::clone(&self.engine);
        let area = self.drawing_area.downgrade();
        motion.connect_leave(move |_| {
            if engine.borrow_mut().pointer_leave() {
                queue_draw(&area);
            }
        });
        self.drawing_area.add_controller(motion);

        let click = gtk::GestureClick::new();
        let engine = Rc::clone(&self.engine);
        let area = self.drawing_area.downgrade();
        click.connect_pressed(move |_, _n_press, x, y| {
            if engine.borrow_mut().pointer_down(x, y) {
                queue_draw(&area);
            }
        });
        self.drawing_area.add_controller(click);
    }

    fn connect_touch(&self) {
        let drag = gtk::GestureDrag::new();
        drag.set_touch_only(true);

        let engine = Rc::clone(&self.engine);
        let area = self.drawing_area.downgrade();
        drag.connect_drag_begin(move |_, x, y| {
            if engine.borrow_mut().touch_start(x, y) {
                queue_draw(&area);
            }
        });
        let engine = Rc::clone(&self.engine);
        let area = self.drawing_area.downgrade();
        drag.connect_drag_update(move |gesture, offset_x, offset_y| {
            let Some((start_x, start_y)) = gesture.start_point() else {
                return;
            };
            if engine
                .borrow_mut()
                .touch_move(start_x + offset_x, start_y + offset_y)
            {
                queue_draw(&area);
            }
        });
        let engine = Rc::clone(&self.engine);
        let area = self.drawing_area.downgrade();
        drag.connect_drag_end(move |_, _, _| {
            if engine.borrow_mut().touch_end() {
                queue_draw(&area);
            }
        });
        self.drawing_area.add_controller(drag);
    }
}

fn queue_draw(area: &gtk::glib::WeakRef<gtk::DrawingArea>) {
    if let Some(area) = area.upgrade() {
        area.queue_draw();
    }
}
