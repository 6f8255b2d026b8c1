use bevy::prelude::*;
use bevy_camera::ClearColorConfig;

use super::components::*;
use crate::engine::BarChart;
use crate::model::{BarDatum, ChartConfig};

/// The chart engine, shared by every system
#[derive(Resource)]
pub struct ChartRes(pub BarChart);

impl ChartRes {
    pub fn new(chart: BarChart) -> Self {
        Self(chart)
    }
}

impl Default for ChartRes {
    fn default() -> Self {
        Self(BarChart::new(ChartConfig::default()))
    }
}

/// Sent whenever a bar or its label is pressed
#[derive(Message, Clone, Debug)]
pub struct BarPressed {
    pub index: usize,
    pub datum: BarDatum,
}

#[derive(Resource)]
pub struct UnitMeshes {
    pub quad: Handle<Mesh>,
}

/// Bookkeeping for the spawned scene, compared each frame to decide rebuilds
#[derive(Resource, Default)]
pub struct ChartScene {
    pub revision: Option<u64>,
    /// Logical window size the scene was built for
    pub window: Vec2,
    /// Shared material for all bars; colors come from the vertices
    pub bar_material: Option<Handle<ColorMaterial>>,
}

/// Maps container space (origin top-left, y down) into the world of a
/// full-window camera centered on the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowSpace {
    pub size: Vec2,
}

impl WindowSpace {
    pub fn to_world(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x - self.size.x * 0.5, self.size.y * 0.5 - p.y)
    }
}

pub fn setup_cameras(mut commands: Commands) {
    for layer in ChartLayer::ALL {
        let clear_color = match layer {
            ChartLayer::Chrome => ClearColorConfig::Default,
            _ => ClearColorConfig::None,
        };
        commands.spawn((
            ChartCamera(layer),
            Camera2d,
            Camera {
                order: layer.order(),
                clear_color,
                ..default()
            },
            layer.render_layers(),
        ));
    }
}

pub fn setup_unit_meshes(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut scene: ResMut<ChartScene>,
) {
    let quad = meshes.add(Mesh::from(Rectangle::new(1.0, 1.0)));
    scene.bar_material = Some(materials.add(ColorMaterial::from(Color::WHITE)));

    // Tooltip entities live for the whole app and are only shown/moved
    let layers = ChartLayer::Overlay.render_layers();
    let panel_mat = materials.add(ColorMaterial::from(Color::srgba(0.08, 0.09, 0.12, 0.0)));
    commands
        .spawn((
            TooltipRoot,
            Transform::default(),
            Visibility::Hidden,
            layers.clone(),
        ))
        .with_children(|parent| {
            parent.spawn((
                TooltipPanel,
                Mesh2d(quad.clone()),
                MeshMaterial2d(panel_mat),
                Transform::default(),
                layers.clone(),
            ));
            parent.spawn((
                TooltipTitle,
                Text2d::new(""),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgba(0.8, 0.82, 0.88, 0.0)),
                Transform::from_translation(Vec3::new(0.0, 10.0, 1.0)),
                layers.clone(),
            ));
            parent.spawn((
                TooltipValue,
                Text2d::new(""),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgba(1.0, 1.0, 1.0, 0.0)),
                Transform::from_translation(Vec3::new(0.0, -10.0, 1.0)),
                layers,
            ));
        });

    commands.insert_resource(UnitMeshes { quad });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_space_flips_y_around_center() {
        let space = WindowSpace {
            size: Vec2::new(400.0, 300.0),
        };
        assert_eq!(space.to_world(Vec2::ZERO), Vec2::new(-200.0, 150.0));
        assert_eq!(space.to_world(Vec2::new(400.0, 300.0)), Vec2::new(200.0, -150.0));
        assert_eq!(space.to_world(Vec2::new(200.0, 150.0)), Vec2::ZERO);
    }
}
