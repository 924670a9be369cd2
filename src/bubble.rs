use crate::constants::*;

/// A transient click marker. Spawned at the pointer position and dropped
/// from the field once its age crosses [`BUBBLE_LIFETIME`].
pub struct Bubble {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    age: f32,
}

impl Bubble {
    /// Fade progress in [0, 1]: 0 when fresh, 1 once the fade is complete.
    pub fn fade(&self) -> f32 {
        (self.age / BUBBLE_FADE_DURATION).min(1.0)
    }

    pub fn opacity(&self) -> f32 {
        1.0 - self.fade()
    }

    pub fn scale(&self) -> f32 {
        1.0 + (BUBBLE_END_SCALE - 1.0) * self.fade()
    }
}

/// The live bubble collection. Ids come from a monotonic counter so two
/// clicks landing on the same frame still get distinct identities.
pub struct BubbleField {
    bubbles: Vec<Bubble>,
    next_id: u64,
}

impl BubbleField {
    pub fn new() -> Self {
        Self { bubbles: Vec::new(), next_id: 0 }
    }

    pub fn spawn(&mut self, x: f32, y: f32) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.bubbles.push(Bubble { id, x, y, age: 0.0 });
        id
    }

    /// Ages every bubble and drops the expired ones. Each bubble expires on
    /// its own clock; removing one never disturbs the others.
    pub fn update(&mut self, dt: f32) {
        for bubble in &mut self.bubbles {
            bubble.age += dt;
        }
        self.bubbles.retain(|b| b.age < BUBBLE_LIFETIME);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bubble> {
        self.bubbles.iter()
    }

    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }

    #[cfg(test)]
    fn contains(&self, id: u64) -> bool {
        self.bubbles.iter().any(|b| b.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_adds_exactly_one_bubble() {
        let mut field = BubbleField::new();
        field.spawn(100.0, 200.0);
        assert_eq!(field.len(), 1);
    }

    #[test]
    fn ids_are_unique_across_spawns() {
        let mut field = BubbleField::new();
        let a = field.spawn(10.0, 10.0);
        let b = field.spawn(10.0, 10.0);
        assert_ne!(a, b);
    }

    #[test]
    fn bubble_survives_until_lifetime_and_no_longer() {
        let mut field = BubbleField::new();
        let id = field.spawn(50.0, 50.0);
        field.update(BUBBLE_LIFETIME - 0.001);
        assert!(field.contains(id));
        field.update(0.002);
        assert!(!field.contains(id));
    }

    #[test]
    fn staggered_bubbles_expire_independently() {
        let mut field = BubbleField::new();
        let a = field.spawn(0.0, 0.0);
        field.update(0.5);
        let b = field.spawn(1.0, 1.0);
        // pushes a to 1.201s, b only to 0.701s
        field.update(0.701);
        assert!(!field.contains(a));
        assert!(field.contains(b));
        field.update(0.5);
        assert!(field.is_empty());
    }

    #[test]
    fn two_immediate_clicks_then_both_gone_after_lifetime() {
        let mut field = BubbleField::new();
        field.spawn(100.0, 200.0);
        field.spawn(300.0, 400.0);
        assert_eq!(field.len(), 2);
        field.update(1.201);
        assert_eq!(field.len(), 0);
    }

    #[test]
    fn fade_runs_to_completion_before_removal() {
        let mut field = BubbleField::new();
        field.spawn(0.0, 0.0);
        field.update(BUBBLE_FADE_DURATION + 0.1);
        let bubble = field.iter().next().unwrap();
        assert_eq!(bubble.opacity(), 0.0);
        assert_eq!(bubble.scale(), BUBBLE_END_SCALE);
    }
}
