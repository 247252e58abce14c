use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Drain the intent slot into the player's held intent
pub fn ingest_intent(world: &mut World, intents: &mut IntentSlot) {
    let Some(dir) = intents.take() else {
        return;
    };

    for (_entity, intent) in world.query_mut::<&mut PlayerIntent>() {
        intent.dir = dir;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_player;

    #[test]
    fn test_pending_intent_applied() {
        let mut world = World::new();
        let player = create_player(&mut world, 300.0);
        let mut intents = IntentSlot::new();
        intents.push(-1);

        ingest_intent(&mut world, &mut intents);

        assert_eq!(world.get::<&PlayerIntent>(player).unwrap().dir, -1);
    }

    #[test]
    fn test_empty_slot_keeps_held_intent() {
        let mut world = World::new();
        let player = create_player(&mut world, 300.0);
        let mut intents = IntentSlot::new();
        intents.push(1);
        ingest_intent(&mut world, &mut intents);

        // Nothing new written: held intent survives the next frame
        ingest_intent(&mut world, &mut intents);

        assert_eq!(world.get::<&PlayerIntent>(player).unwrap().dir, 1);
    }
}
