use crate::coords::Vec2;
use crate::id::EntityId;

/// Lifecycle state of an entity.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
#[repr(i8)]
pub enum EntityState {
    /// Marked for removal; reaped on the next pipeline pass.
    Destroyed = -1,
    #[default]
    Neutral = 0,
    Active = 1,
}

/// Discriminator the pipeline uses to decide drawable vs generic.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum EntityKind {
    #[default]
    Base,
    Sprite,
    SpriteFont,
    /// Kinds defined outside this crate.
    Custom { name: &'static str, drawable: bool },
}

impl EntityKind {
    /// Drawables go through the depth sort and the five layer passes.
    #[inline]
    pub fn is_drawable(self) -> bool {
        match self {
            EntityKind::Sprite | EntityKind::SpriteFont => true,
            EntityKind::Custom { drawable, .. } => drawable,
            EntityKind::Base => false,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EntityKind::Base => "BaseComponent",
            EntityKind::Sprite => "Sprite",
            EntityKind::SpriteFont => "SpriteFont",
            EntityKind::Custom { name, .. } => name,
        }
    }
}

/// Semantic fields shared by every entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Attributes {
    pub id: EntityId,
    pub kind: EntityKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Rotation in degrees.
    pub angle: f32,
    /// 0..=100.
    pub opacity: u8,
    /// Draw pass, 0..=4. Anything else is kept but never drawn.
    pub layer: i32,
    pub z_index: f32,
    pub state: EntityState,
    /// Offset used by the depth key and by draw placement.
    pub origin: Vec2,
    /// Current animation frame; sprites map it onto their sheet.
    pub frame: u32,
}

impl Attributes {
    /// Number of layer passes the pipeline runs.
    pub const LAYERS: i32 = 5;

    /// Defaults for a fresh entity with the given id.
    pub fn new(id: EntityId, kind: EntityKind) -> Self {
        Self {
            id,
            kind,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            angle: 0.0,
            opacity: 100,
            layer: 0,
            z_index: 0.0,
            state: EntityState::Neutral,
            origin: Vec2::zero(),
            frame: 0,
        }
    }

    /// Depth used by the isometric sort: `y + origin.y`.
    #[inline]
    pub fn depth(&self) -> f32 {
        self.y + self.origin.y
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.state == EntityState::Destroyed
    }

    #[inline]
    pub fn in_drawn_layer(&self) -> bool {
        (0..Self::LAYERS).contains(&self.layer)
    }

    /// Overwrites every field present in `patch`.
    ///
    /// No field is protected: a patch carrying `id` or `state` replaces the
    /// bookkeeping value too.
    pub fn merge(&mut self, patch: AttributePatch) {
        let AttributePatch {
            id,
            kind,
            x,
            y,
            width,
            height,
            angle,
            opacity,
            layer,
            z_index,
            state,
            origin,
            frame,
        } = patch;

        if let Some(v) = id {
            self.id = v;
        }
        if let Some(v) = kind {
            self.kind = v;
        }
        if let Some(v) = x {
            self.x = v;
        }
        if let Some(v) = y {
            self.y = v;
        }
        if let Some(v) = width {
            self.width = v;
        }
        if let Some(v) = height {
            self.height = v;
        }
        if let Some(v) = angle {
            self.angle = v;
        }
        if let Some(v) = opacity {
            self.opacity = v;
        }
        if let Some(v) = layer {
            self.layer = v;
        }
        if let Some(v) = z_index {
            self.z_index = v;
        }
        if let Some(v) = state {
            self.state = v;
        }
        if let Some(v) = origin {
            self.origin = v;
        }
        if let Some(v) = frame {
            self.frame = v;
        }
    }
}

/// Partial attribute set merged over kind defaults.
///
/// Built with the chained setters:
///
/// ```
/// use easel_engine::core::AttributePatch;
/// let patch = AttributePatch::new().position(10.0, 20.0).layer(2).z_index(1.0);
/// assert_eq!(patch.layer, Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributePatch {
    pub id: Option<EntityId>,
    pub kind: Option<EntityKind>,
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub angle: Option<f32>,
    pub opacity: Option<u8>,
    pub layer: Option<i32>,
    pub z_index: Option<f32>,
    pub state: Option<EntityState>,
    pub origin: Option<Vec2>,
    pub frame: Option<u32>,
}

impl AttributePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: EntityId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn position(mut self, x: f32, y: f32) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn angle(mut self, degrees: f32) -> Self {
        self.angle = Some(degrees);
        self
    }

    pub fn opacity(mut self, opacity: u8) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn layer(mut self, layer: i32) -> Self {
        self.layer = Some(layer);
        self
    }

    pub fn z_index(mut self, z: f32) -> Self {
        self.z_index = Some(z);
        self
    }

    pub fn state(mut self, state: EntityState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn origin(mut self, x: f32, y: f32) -> Self {
        self.origin = Some(Vec2::new(x, y));
        self
    }

    pub fn frame(mut self, frame: u32) -> Self {
        self.frame = Some(frame);
        self
    }
}
