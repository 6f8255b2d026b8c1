//! Spawning helpers for each part of the chart scene.
//!
//! Canvas world: origin at the left end of the baseline, y up, x in content
//! coordinates. Label world: origin at the left end of the label row's
//! center line. Chrome world: see [`WindowSpace`].

use bevy::prelude::*;
use bevy_camera::visibility::RenderLayers;

use super::components::*;
use super::components::SceneRoot;
use super::mesh::bar_mesh;
use super::resources::{UnitMeshes, WindowSpace};
use crate::engine::{BarChart, BarLayout, PagerDirection, format_value};
use crate::model::Gradient;

const TICK_FONT_SIZE: f32 = 10.0;
const LABEL_FONT_SIZE: f32 = 12.0;

pub fn spawn_root(commands: &mut Commands, layer: ChartLayer, translation: Vec3) -> Entity {
    commands
        .spawn((
            SceneRoot(layer),
            Transform::from_translation(translation),
            Visibility::default(),
            layer.render_layers(),
        ))
        .id()
}

pub fn bar_gradient(chart: &BarChart, index: usize) -> Gradient {
    let fallback = chart.config().gradient;
    chart
        .data()
        .get(index)
        .map(|d| d.gradient(fallback))
        .unwrap_or(fallback)
}

/// One mesh per bar, built at its current animated height
pub fn draw_bars(
    commands: &mut Commands,
    root: Entity,
    chart: &BarChart,
    layout: &BarLayout,
    meshes: &mut Assets<Mesh>,
    material: Handle<ColorMaterial>,
) {
    let layers = ChartLayer::Canvas.render_layers();
    let radius = chart.config().corner_radius;

    commands.entity(root).with_children(|parent| {
        for index in 0..layout.bar_count {
            let height = chart.bar_height(index);
            let mesh = meshes.add(bar_mesh(
                layout.bar_width,
                height,
                radius,
                bar_gradient(chart, index),
            ));
            parent.spawn((
                BarMesh {
                    index,
                    drawn_height: height,
                },
                Mesh2d(mesh),
                MeshMaterial2d(material.clone()),
                Transform::from_xyz(layout.bar_x(index), 0.0, 1.0),
                layers.clone(),
            ));
        }
    });
}

pub fn draw_labels(commands: &mut Commands, root: Entity, chart: &BarChart, layout: &BarLayout) {
    let layers = ChartLayer::Labels.render_layers();
    let color: Color = chart.config().label_color.into();

    commands.entity(root).with_children(|parent| {
        for (index, datum) in chart.data().iter().enumerate().take(layout.bar_count) {
            parent.spawn((
                Text2d::new(datum.label.clone()),
                TextFont {
                    font_size: LABEL_FONT_SIZE,
                    ..default()
                },
                TextColor(color),
                Transform::from_xyz(layout.bar_center_x(index), 0.0, 1.0),
                layers.clone(),
            ));
        }
    });
}

/// Y-axis tick values in the gutter and faint grid lines behind the bars
pub fn draw_axis(
    commands: &mut Commands,
    root: Entity,
    chart: &BarChart,
    space: WindowSpace,
    unit: &UnitMeshes,
    materials: &mut Assets<ColorMaterial>,
) {
    let layers = ChartLayer::Chrome.render_layers();
    let geo = chart.geometry();
    let label_color: Color = chart.config().label_color.into();
    let grid_mat = materials.add(ColorMaterial::from(label_color.with_alpha(0.12)));
    let base_mat = materials.add(ColorMaterial::from(label_color.with_alpha(0.35)));

    commands.entity(root).with_children(|parent| {
        for (i, tick) in chart.axis_ticks().into_iter().enumerate() {
            let line = space.to_world(Vec2::new(geo.canvas.center().x, tick.y));
            let thickness = if i == 0 { 1.5 } else { 1.0 };
            parent.spawn((
                Mesh2d(unit.quad.clone()),
                MeshMaterial2d(if i == 0 {
                    base_mat.clone()
                } else {
                    grid_mat.clone()
                }),
                Transform {
                    translation: line.extend(0.5),
                    scale: Vec3::new(geo.canvas.width(), thickness, 1.0),
                    ..default()
                },
                layers.clone(),
            ));

            let text = space.to_world(Vec2::new(geo.gutter.center().x, tick.y));
            parent.spawn((
                Text2d::new(format_value(tick.value)),
                TextFont {
                    font_size: TICK_FONT_SIZE,
                    ..default()
                },
                TextColor(label_color.with_alpha(0.7)),
                Transform::from_translation(text.extend(1.0)),
                layers.clone(),
            ));
        }
    });
}

/// Prev/next buttons in the strip above the canvas
pub fn draw_pager(
    commands: &mut Commands,
    root: Entity,
    chart: &BarChart,
    space: WindowSpace,
    unit: &UnitMeshes,
    materials: &mut Assets<ColorMaterial>,
) {
    let layers = ChartLayer::Chrome.render_layers();
    let geo = chart.geometry();
    let label_color: Color = chart.config().label_color.into();

    let buttons = [
        (PagerDirection::Prev, geo.pager_prev, "<"),
        (PagerDirection::Next, geo.pager_next, ">"),
    ];
    for (direction, rect, glyph) in buttons {
        let Some(rect) = rect else { continue };
        let center = space.to_world(rect.center());
        let mat = materials.add(ColorMaterial::from(label_color.with_alpha(0.15)));

        commands.entity(root).with_children(|parent| {
            parent.spawn((
                PagerButton(direction),
                Mesh2d(unit.quad.clone()),
                MeshMaterial2d(mat),
                Transform {
                    translation: center.extend(1.0),
                    scale: rect.size().extend(1.0),
                    ..default()
                },
                layers.clone(),
            ));
            parent.spawn((
                Text2d::new(glyph),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(label_color),
                Transform::from_translation(center.extend(2.0)),
                layers.clone(),
            ));
        });
    }
}

/// Empty-state view: a muted panel over the canvas with a caption
pub fn draw_placeholder(
    commands: &mut Commands,
    root: Entity,
    chart: &BarChart,
    space: WindowSpace,
    unit: &UnitMeshes,
    materials: &mut Assets<ColorMaterial>,
    layers: RenderLayers,
) {
    let geo = chart.geometry();
    let label_color: Color = chart.config().label_color.into();
    let mat = materials.add(ColorMaterial::from(label_color.with_alpha(0.05)));
    let center = space.to_world(geo.canvas.center());

    commands.entity(root).with_children(|parent| {
        parent.spawn((
            Mesh2d(unit.quad.clone()),
            MeshMaterial2d(mat),
            Transform {
                translation: center.extend(0.5),
                scale: geo.canvas.size().extend(1.0),
                ..default()
            },
            layers.clone(),
        ));
        parent.spawn((
            Text2d::new("No data"),
            TextFont {
                font_size: 14.0,
                ..default()
            },
            TextColor(label_color.with_alpha(0.6)),
            Transform::from_translation(center.extend(1.0)),
            layers,
        ));
    });
}
