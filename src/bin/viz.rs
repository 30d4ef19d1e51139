use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints, Points};

use vortex_panel::airfoil::{AirfoilSpec, PanelGeometry};
use vortex_panel::flow::{Angle, FlowCondition};
use vortex_panel::io::coords;
use vortex_panel::solver::{self, SolutionState};

fn main() -> eframe::Result {
    let n_panels = 50;
    let aoa_deg = 5.0;

    let cambered = PanelGeometry::generate(&AirfoilSpec::naca("2414", n_panels).unwrap())
        .expect("geometry generation failed");
    let symmetric = PanelGeometry::generate(&AirfoilSpec::naca("0010", n_panels).unwrap())
        .expect("geometry generation failed");

    let flow = FlowCondition::new(Angle::Degrees(aoa_deg), 1.0);
    let cambered_state = solver::solve(&cambered, &flow).expect("solve failed");
    let symmetric_state = solver::solve(&symmetric, &flow).expect("solve failed");

    // Cl vs alpha sweep, 0 to 10 deg
    let sweep = |spec: AirfoilSpec| -> Vec<[f64; 2]> {
        let geometry = PanelGeometry::generate(&spec).unwrap();
        (0..=20)
            .map(|i| {
                let aoa = i as f64 * 0.5;
                let fc = FlowCondition::new(Angle::Degrees(aoa), 1.0);
                [aoa, solver::solve(&geometry, &fc).unwrap().total_cl()]
            })
            .collect()
    };
    let cla_2414 = sweep(AirfoilSpec::naca("2414", n_panels).unwrap());
    let cla_0010 = sweep(AirfoilSpec::naca("0010", n_panels).unwrap());

    // optional reference shape overlay
    let reference = coords::load_coordinates("data/naca2414.txt").ok();

    let app = PanelViz {
        aoa_deg,
        cambered,
        cambered_state,
        symmetric_state,
        cla_2414,
        cla_0010,
        reference,
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Vortex Panel Method", options, Box::new(|_| Ok(Box::new(app))))
}

struct PanelViz {
    aoa_deg: f64,
    cambered: PanelGeometry,
    cambered_state: SolutionState,
    symmetric_state: SolutionState,
    cla_2414: Vec<[f64; 2]>,
    cla_0010: Vec<[f64; 2]>,
    reference: Option<Vec<nalgebra::Point2<f64>>>,
}

fn distribution(state: &SolutionState, values: &[f64]) -> PlotPoints<'static> {
    state
        .x_colloc
        .iter()
        .zip(values)
        .map(|(x, v)| [*x, *v])
        .collect()
}

impl eframe::App for PanelViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Discrete vortex panel method");
            ui.label(format!(
                "AoA: {:.1} deg  |  NACA 2414 Cl: {:.4}  |  NACA 0010 Cl: {:.4}  |  {} panels",
                self.aoa_deg,
                self.cambered_state.total_cl(),
                self.symmetric_state.total_cl(),
                self.cambered_state.n_panels(),
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;
            let half_h = available.y / 2.0 - 8.0;

            ui.horizontal(|ui| {
                // Pressure difference over chord
                ui.vertical(|ui| {
                    ui.label("ΔCp over x/c");
                    let cambered = distribution(&self.cambered_state, &self.cambered_state.delta_cp);
                    let symmetric =
                        distribution(&self.symmetric_state, &self.symmetric_state.delta_cp);
                    Plot::new("dcp")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("x/c")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("NACA 2414", cambered));
                            plot_ui.line(Line::new("NACA 0010", symmetric));
                        });
                });

                // Lift difference over chord
                ui.vertical(|ui| {
                    ui.label("ΔCl over x/c");
                    let cambered = distribution(&self.cambered_state, &self.cambered_state.delta_cl);
                    let symmetric =
                        distribution(&self.symmetric_state, &self.symmetric_state.delta_cl);
                    Plot::new("dcl")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("x/c")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("NACA 2414", cambered));
                            plot_ui.line(Line::new("NACA 0010", symmetric));
                        });
                });
            });

            ui.horizontal(|ui| {
                // Discretized camberline with singularity points
                ui.vertical(|ui| {
                    ui.label("Camberline and panel points");
                    let edges: PlotPoints =
                        self.cambered.edges.iter().map(|p| [p.x, p.y]).collect();
                    let vortex: PlotPoints = self
                        .cambered
                        .vortex_points
                        .iter()
                        .map(|p| [p.x, p.y])
                        .collect();
                    let colloc: PlotPoints = self
                        .cambered
                        .colloc_points
                        .iter()
                        .map(|p| [p.x, p.y])
                        .collect();
                    Plot::new("camber")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("x/c")
                        .data_aspect(1.0)
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("camberline", edges));
                            plot_ui.points(Points::new("vortex", vortex));
                            plot_ui.points(Points::new("collocation", colloc));
                            if let Some(reference) = &self.reference {
                                let pts: PlotPoints =
                                    reference.iter().map(|p| [p.x, p.y]).collect();
                                plot_ui.line(Line::new("reference surface", pts));
                            }
                        });
                });

                // Lift slope
                ui.vertical(|ui| {
                    ui.label("Cl vs AoA");
                    let cambered: PlotPoints = self.cla_2414.iter().copied().collect();
                    let symmetric: PlotPoints = self.cla_0010.iter().copied().collect();
                    Plot::new("cla")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("AoA (deg)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("NACA 2414", cambered));
                            plot_ui.line(Line::new("NACA 0010", symmetric));
                        });
                });
            });
        });
    }
}
