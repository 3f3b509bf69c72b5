use crate::config::RenderMode;
use crate::core::{Attributes, Entity, FrameCtx};
use crate::id::EntityId;
use crate::registry::Registry;

use super::DepthKey;

/// What one pipeline pass did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PassReport {
    /// Non-drawable components updated.
    pub generic: usize,
    /// Drawable update calls across all layer passes.
    pub drawn: usize,
    /// Drawables skipped because their layer is outside 0..=4.
    pub unlayered: usize,
    /// Components removed at the end of the pass, in removal order.
    pub reaped: Vec<EntityId>,
}

/// Rebinds every behavior of `entity` to it and runs their updates.
pub fn dispatch_traits(entity: &mut dyn Entity) {
    let base = entity.base_mut();
    base.traits.dispatch(&mut base.attributes);
}

/// Runs one pass over the registry's components.
pub fn run_pass(registry: &mut Registry, ctx: &mut FrameCtx<'_>, mode: RenderMode) -> PassReport {
    let report = match mode {
        RenderMode::Isometric => isometric(registry, ctx),
        RenderMode::Flat => flat(registry, ctx),
    };

    log::trace!(
        "pass {}: generic={} drawn={} unlayered={} reaped={}",
        ctx.time.frame_index,
        report.generic,
        report.drawn,
        report.unlayered,
        report.reaped.len()
    );
    report
}

fn isometric(registry: &mut Registry, ctx: &mut FrameCtx<'_>) -> PassReport {
    let mut report = PassReport::default();
    let mut doomed = Vec::new();
    let mut drawables = Vec::new();

    for entity in registry.components_mut() {
        dispatch_traits(entity.as_mut());

        let attrs = entity.attributes();
        let (id, destroyed, drawable) = (attrs.id, attrs.is_destroyed(), attrs.kind.is_drawable());

        if destroyed {
            doomed.push(id);
        } else if drawable {
            drawables.push(entity);
        } else {
            entity.update(ctx);
            report.generic += 1;
        }
    }

    drawables.sort_by_key(|e| DepthKey::of(e.attributes()));

    // Layers are read once; an update that moves its entity to another layer
    // takes effect next frame.
    let layers: Vec<i32> = drawables.iter().map(|e| e.attributes().layer).collect();
    report.unlayered = layers
        .iter()
        .filter(|&&l| !(0..Attributes::LAYERS).contains(&l))
        .count();

    for layer in 0..Attributes::LAYERS {
        for (entity, _) in drawables.iter_mut().zip(&layers).filter(|(_, l)| **l == layer) {
            entity.update(ctx);
            report.drawn += 1;
        }
    }

    drop(drawables);
    reap(registry, doomed, &mut report);
    report
}

fn flat(registry: &mut Registry, ctx: &mut FrameCtx<'_>) -> PassReport {
    let mut report = PassReport::default();
    let mut doomed = Vec::new();

    for entity in registry.components_mut() {
        dispatch_traits(entity.as_mut());

        if entity.attributes().is_destroyed() {
            doomed.push(entity.id());
            continue;
        }

        entity.update(ctx);
        if entity.attributes().kind.is_drawable() {
            report.drawn += 1;
        } else {
            report.generic += 1;
        }
    }

    reap(registry, doomed, &mut report);
    report
}

fn reap(registry: &mut Registry, doomed: Vec<EntityId>, report: &mut PassReport) {
    for id in doomed {
        if registry.remove_component(id).is_some() {
            log::debug!("reaped component {id}");
            report.reaped.push(id);
        }
    }
}
