use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::input::touch::Touches;
use bevy::log::debug;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_camera::{OrthographicProjection, Projection, ScalingMode, Viewport};
use bevy_math::UVec2;

use super::components::*;
use super::components::SceneRoot;
use super::draw::*;
use super::mesh::bar_mesh;
use super::resources::*;
use crate::engine::{LayoutState, PagerDirection, PressOutcome};

/// Pixels scrolled per wheel line
const WHEEL_LINE_STEP: f32 = 40.0;

/// The chart fills the window width
pub fn measure_container(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut chart: ResMut<ChartRes>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let width = window.width();
    if chart.0.container_width() != width {
        chart.0.measure(width);
    }
}

/// Clicks and touches become presses; selections are re-broadcast as messages
pub fn handle_press(
    windows: Query<&Window, With<PrimaryWindow>>,
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    mut chart: ResMut<ChartRes>,
    mut pressed: MessageWriter<BarPressed>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    let mut points: Vec<Vec2> = touches.iter_just_pressed().map(|t| t.position()).collect();
    if mouse.just_pressed(MouseButton::Left) {
        if let Some(cursor) = window.cursor_position() {
            points.push(cursor);
        }
    }

    for point in points {
        if let PressOutcome::Selected(index) = chart.0.press(point) {
            if let Some(datum) = chart.0.data().get(index).cloned() {
                pressed.write(BarPressed { index, datum });
            }
        }
    }
}

pub fn handle_scroll_keys(
    mut wheel: MessageReader<MouseWheel>,
    keys: Res<ButtonInput<KeyCode>>,
    mut chart: ResMut<ChartRes>,
) {
    let mut dx = 0.0;
    for event in wheel.read() {
        let step = match event.unit {
            MouseScrollUnit::Line => WHEEL_LINE_STEP,
            MouseScrollUnit::Pixel => 1.0,
        };
        // Either axis scrolls horizontally; wheel-down moves toward later bars
        dx -= (event.x + event.y) * step;
    }
    if dx != 0.0 {
        chart.0.scroll_by(dx);
    }

    if keys.just_pressed(KeyCode::ArrowRight) {
        chart.0.next();
    }
    if keys.just_pressed(KeyCode::ArrowLeft) {
        chart.0.prev();
    }
    if keys.just_pressed(KeyCode::Escape) {
        chart.0.dismiss_tooltip();
    }
}

pub fn advance_chart(time: Res<Time>, mut chart: ResMut<ChartRes>) {
    chart.0.tick(time.delta());
}

/// Despawn and respawn every layer root when the chart's shape changes
pub fn rebuild_scene(
    mut commands: Commands,
    windows: Query<&Window, With<PrimaryWindow>>,
    chart: Res<ChartRes>,
    mut scene: ResMut<ChartScene>,
    roots: Query<Entity, With<SceneRoot>>,
    unit: Option<Res<UnitMeshes>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let (Some(unit), Some(bar_material)) = (unit, scene.bar_material.clone()) else {
        return;
    };
    let size = Vec2::new(window.width(), window.height());
    let chart = &chart.0;
    if scene.revision == Some(chart.revision()) && scene.window == size {
        return;
    }

    for root in roots.iter() {
        commands.entity(root).try_despawn();
    }

    let space = WindowSpace { size };
    let chrome = spawn_root(&mut commands, ChartLayer::Chrome, Vec3::ZERO);

    match chart.layout() {
        LayoutState::Unmeasured => {}
        LayoutState::Empty => {
            draw_placeholder(
                &mut commands,
                chrome,
                chart,
                space,
                &unit,
                &mut materials,
                ChartLayer::Chrome.render_layers(),
            );
        }
        LayoutState::Ready(layout) => {
            let canvas = spawn_root(&mut commands, ChartLayer::Canvas, Vec3::ZERO);
            let labels = spawn_root(
                &mut commands,
                ChartLayer::Labels,
                Vec3::new(chart.label_translation(), 0.0, 0.0),
            );
            draw_axis(&mut commands, chrome, chart, space, &unit, &mut materials);
            draw_bars(&mut commands, canvas, chart, &layout, &mut meshes, bar_material);
            draw_labels(&mut commands, labels, chart, &layout);
            if chart.pagination_visible() {
                draw_pager(&mut commands, chrome, chart, space, &unit, &mut materials);
            }
        }
    }

    debug!(
        "chart scene rebuilt: revision {} window {:?} bars {}",
        chart.revision(),
        size,
        chart.data().len()
    );
    scene.revision = Some(chart.revision());
    scene.window = size;
}

/// Physical viewport for a container-space rect, clipped to the render
/// target, plus the logical rect that remains visible.
pub fn clipped_viewport(rect: Rect, scale: f32, target: UVec2) -> Option<(Viewport, Rect)> {
    let min = (rect.min * scale).round().max(Vec2::ZERO);
    let max = (rect.max * scale).round().min(target.as_vec2());
    if max.x - min.x < 1.0 || max.y - min.y < 1.0 {
        return None;
    }
    let viewport = Viewport {
        physical_position: min.as_uvec2(),
        physical_size: (max - min).as_uvec2(),
        depth: 0.0..1.0,
    };
    Some((viewport, Rect::from_corners(min / scale, max / scale)))
}

/// Point the canvas and label cameras at their clipped regions. The canvas
/// camera follows the scroll offset; the label root moves the opposite way.
pub fn sync_cameras(
    windows: Query<&Window, With<PrimaryWindow>>,
    chart: Res<ChartRes>,
    mut cameras: Query<(&ChartCamera, &mut Camera, &mut Projection, &mut Transform)>,
    mut roots: Query<(&SceneRoot, &mut Transform), Without<ChartCamera>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let chart = &chart.0;
    let scale = window.resolution.scale_factor() as f32;
    let target = window.physical_size();
    let geo = chart.geometry();
    let ready = chart.layout().ready().is_some();
    let offset = chart.scroll_offset();

    for (cam, mut camera, mut projection, mut transform) in cameras.iter_mut() {
        // World origin of the layer, in container space
        let (region, origin) = match cam.0 {
            ChartLayer::Canvas => (
                geo.canvas,
                Vec2::new(geo.canvas.min.x - offset, geo.canvas.max.y),
            ),
            ChartLayer::Labels => (
                geo.label_row,
                Vec2::new(geo.label_row.min.x, geo.label_row.center().y),
            ),
            ChartLayer::Chrome | ChartLayer::Overlay => continue,
        };

        let clipped = if ready {
            clipped_viewport(region, scale, target)
        } else {
            None
        };
        let Some((viewport, visible)) = clipped else {
            camera.is_active = false;
            continue;
        };

        let center = visible.center();
        camera.is_active = true;
        camera.viewport = Some(viewport);

        let mut ortho = OrthographicProjection::default_2d();
        ortho.scaling_mode = ScalingMode::FixedVertical {
            viewport_height: visible.height(),
        };
        *projection = Projection::from(ortho);
        transform.translation = Vec3::new(center.x - origin.x, origin.y - center.y, 1000.0);
    }

    for (root, mut transform) in roots.iter_mut() {
        if root.0 == ChartLayer::Labels {
            transform.translation.x = chart.label_translation();
        }
    }
}

/// Regrow bar meshes whose animated height moved since they were built
pub fn animate_bars(
    chart: Res<ChartRes>,
    mut bars: Query<(&mut BarMesh, &Mesh2d)>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let chart = &chart.0;
    let state = chart.layout();
    let Some(layout) = state.ready() else {
        return;
    };
    let radius = chart.config().corner_radius;

    for (mut bar, handle) in bars.iter_mut() {
        let height = chart.bar_height(bar.index);
        if (height - bar.drawn_height).abs() < 0.05 {
            continue;
        }
        if let Some(mesh) = meshes.get_mut(&handle.0) {
            *mesh = bar_mesh(
                layout.bar_width,
                height,
                radius,
                bar_gradient(chart, bar.index),
            );
            bar.drawn_height = height;
        }
    }
}

pub fn update_tooltip(
    windows: Query<&Window, With<PrimaryWindow>>,
    chart: Res<ChartRes>,
    mut root: Query<(&mut Transform, &mut Visibility), With<TooltipRoot>>,
    mut panel: Query<
        (&mut Transform, &MeshMaterial2d<ColorMaterial>),
        (With<TooltipPanel>, Without<TooltipRoot>),
    >,
    mut title: Query<(&mut Text2d, &mut TextColor), (With<TooltipTitle>, Without<TooltipValue>)>,
    mut value: Query<(&mut Text2d, &mut TextColor), (With<TooltipValue>, Without<TooltipTitle>)>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((mut root_tf, mut visibility)) = root.single_mut() else {
        return;
    };
    let Some(view) = chart.0.tooltip_view() else {
        *visibility = Visibility::Hidden;
        return;
    };
    *visibility = Visibility::Visible;

    let space = WindowSpace {
        size: Vec2::new(window.width(), window.height()),
    };
    let center = space.to_world(view.position + view.size * 0.5);
    root_tf.translation = center.extend(10.0);
    root_tf.scale = Vec3::new(view.scale, view.scale, 1.0);

    if let Ok((mut tf, material)) = panel.single_mut() {
        tf.scale = view.size.extend(1.0);
        if let Some(mat) = materials.get_mut(&material.0) {
            mat.color = mat.color.with_alpha(0.92 * view.opacity);
        }
    }
    if let Ok((mut text, mut color)) = title.single_mut() {
        if text.0 != view.title {
            text.0 = view.title.clone();
        }
        color.0 = color.0.with_alpha(0.75 * view.opacity);
    }
    if let Ok((mut text, mut color)) = value.single_mut() {
        if text.0 != view.value_text {
            text.0 = view.value_text.clone();
        }
        color.0 = color.0.with_alpha(view.opacity);
    }
}

/// Dim a pager button once its end of the content is reached
pub fn update_pager(
    chart: Res<ChartRes>,
    buttons: Query<(&PagerButton, &MeshMaterial2d<ColorMaterial>)>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    for (button, material) in buttons.iter() {
        let enabled = match button.0 {
            PagerDirection::Prev => chart.0.can_prev(),
            PagerDirection::Next => chart.0.can_next(),
        };
        let alpha = if enabled { 0.15 } else { 0.04 };
        if let Some(mat) = materials.get_mut(&material.0) {
            if mat.color.alpha() != alpha {
                mat.color.set_alpha(alpha);
            }
        }
    }
}
