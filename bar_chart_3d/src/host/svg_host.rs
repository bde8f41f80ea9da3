/// SVG snapshot host - renders a still frame of the chart as an SVG document.
///
/// Software path: project every triangle and line with the camera's
/// view-projection matrix, drop back faces, shade lit faces with the scene's
/// point lights, then paint back-to-front (painter's algorithm).

use std::fs;
use std::path::Path;
use glam::{Vec2, Vec3};
use crate::camera::{Camera, Viewport};
use crate::error::{Error, Result};
use crate::resource::{Mesh, PrimitiveTopology};
use crate::scene::{ChartScene, Color, LightSpec, PrimitiveKey};
use crate::{engine_debug, engine_info, engine_warn};
use super::render_host::{FrameStats, RenderHost};

/// Ambient term added to Lambert shading so faces turned away from both
/// lights stay readable
pub const DEFAULT_AMBIENT: f32 = 0.25;

const LINE_WIDTH: f32 = 1.5;

enum Shape {
    Triangle { points: [Vec2; 3], fill: Color },
    Line { from: Vec2, to: Vec2, stroke: Color },
}

struct DrawItem {
    /// Mean NDC depth, larger is farther
    depth: f32,
    shape: Shape,
}

/// Scene state captured at load time
struct LoadedScene {
    meshes: Vec<(PrimitiveKey, Mesh)>,
    lights: Vec<LightSpec>,
    background: Color,
}

/// Host producing one SVG document per frame
pub struct SvgSnapshotHost {
    viewport: Viewport,
    ambient: f32,
    scene: Option<LoadedScene>,
    frames: u64,
    last_svg: Option<String>,
}

impl SvgSnapshotHost {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ambient: DEFAULT_AMBIENT,
            scene: None,
            frames: 0,
            last_svg: None,
        }
    }

    /// Override the ambient term (0 reproduces pure point-light shading)
    pub fn with_ambient(mut self, ambient: f32) -> Self {
        self.ambient = ambient.max(0.0);
        self
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// SVG of the most recent frame
    pub fn svg(&self) -> Option<&str> {
        self.last_svg.as_deref()
    }

    /// Write the most recent frame to disk
    pub fn write_svg(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let svg = self
            .last_svg
            .as_deref()
            .ok_or_else(|| Error::HostNotReady("no frame rendered yet".to_string()))?;
        fs::write(path, svg).map_err(|e| Error::Output(format!("{}: {}", path.display(), e)))?;
        engine_info!("barchart3d::SvgHost", "Frame written to {}", path.display());
        Ok(())
    }

    fn collect_items(&self, scene: &LoadedScene, camera: &Camera, stats: &mut FrameStats) -> Vec<DrawItem> {
        let eye = camera.position();
        let mut items = Vec::new();

        for (_, mesh) in &scene.meshes {
            let geometry = mesh.geometry();
            let material = mesh.material();
            stats.draw_calls += 1;

            match geometry.topology() {
                PrimitiveTopology::TriangleList => {
                    for tri in geometry.triangles() {
                        let world = tri.map(|v| mesh.to_world_point(v.position()));
                        let centroid = (world[0] + world[1] + world[2]) / 3.0;
                        let normal = mesh.to_world_normal(tri[0].normal());

                        if normal.dot(eye - centroid) <= 0.0 {
                            continue;
                        }
                        let Some(projected) = project_all(camera, &world) else {
                            continue;
                        };

                        stats.triangles += 1;
                        items.push(DrawItem {
                            depth: (projected[0].z + projected[1].z + projected[2].z) / 3.0,
                            shape: Shape::Triangle {
                                points: projected.map(|p| p.truncate()),
                                fill: material.shade(centroid, normal, &scene.lights, self.ambient),
                            },
                        });
                    }
                }
                PrimitiveTopology::LineList => {
                    for segment in geometry.vertices().chunks_exact(2) {
                        let world = [
                            mesh.to_world_point(segment[0].position()),
                            mesh.to_world_point(segment[1].position()),
                        ];
                        let Some(projected) = project_all(camera, &world) else {
                            continue;
                        };

                        stats.lines += 1;
                        items.push(DrawItem {
                            depth: (projected[0].z + projected[1].z) / 2.0,
                            shape: Shape::Line {
                                from: projected[0].truncate(),
                                to: projected[1].truncate(),
                                stroke: material.color(),
                            },
                        });
                    }
                }
            }
        }

        items
    }
}

/// Project every point, or none if any lies behind the eye
fn project_all<const N: usize>(camera: &Camera, points: &[Vec3; N]) -> Option<[Vec3; N]> {
    let mut out = [Vec3::ZERO; N];
    for (slot, point) in out.iter_mut().zip(points) {
        *slot = camera.world_to_screen(*point)?;
    }
    Some(out)
}

fn render_document(viewport: Viewport, background: Color, items: &[DrawItem]) -> String {
    let (width, height) = (viewport.width(), viewport.height());
    let mut svg = String::with_capacity(items.len() * 120 + 256);

    svg.push_str(&format!(
        "<svg width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        width, height, width, height
    ));
    svg.push_str(&format!(
        "<rect width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
        width, height, background.to_css()
    ));

    for item in items {
        match &item.shape {
            Shape::Triangle { points, fill } => {
                // Same-color stroke hides hairline seams between adjacent triangles
                svg.push_str(&format!(
                    "<polygon points=\"{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"0.5\"/>\n",
                    points[0].x, points[0].y,
                    points[1].x, points[1].y,
                    points[2].x, points[2].y,
                    fill.to_css(), fill.to_css()
                ));
            }
            Shape::Line { from, to, stroke } => {
                svg.push_str(&format!(
                    "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
                    from.x, from.y, to.x, to.y, stroke.to_css(), LINE_WIDTH
                ));
            }
        }
    }

    svg.push_str("</svg>\n");
    svg
}

impl RenderHost for SvgSnapshotHost {
    fn load_scene(&mut self, scene: &ChartScene, camera: &Camera) -> Result<()> {
        let meshes = Mesh::build_all(scene)?;
        engine_debug!("barchart3d::SvgHost", "Loaded {} meshes", meshes.len());

        self.scene = Some(LoadedScene {
            meshes,
            lights: scene.lights().copied().collect(),
            background: scene.background(),
        });
        self.viewport = *camera.viewport();
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) -> Result<()> {
        self.viewport = viewport;
        Ok(())
    }

    fn render_frame(&mut self, camera: &Camera) -> Result<FrameStats> {
        let scene = self
            .scene
            .as_ref()
            .ok_or_else(|| Error::HostNotReady("render_frame before load_scene".to_string()))?;

        if *camera.viewport() != self.viewport {
            engine_warn!("barchart3d::SvgHost",
                "Camera viewport {}x{} differs from host viewport {}x{}",
                camera.viewport().width(), camera.viewport().height(),
                self.viewport.width(), self.viewport.height());
        }

        let mut stats = FrameStats { frame_index: self.frames, ..FrameStats::default() };
        let mut items = self.collect_items(scene, camera, &mut stats);
        items.sort_by(|a, b| b.depth.total_cmp(&a.depth));

        self.last_svg = Some(render_document(self.viewport, scene.background, &items));
        self.frames += 1;

        engine_debug!("barchart3d::SvgHost",
            "Frame {}: {} triangles, {} lines",
            stats.frame_index, stats.triangles, stats.lines);

        Ok(stats)
    }
}

#[cfg(test)]
#[path = "svg_host_tests.rs"]
mod tests;
