use trijet_kinematics::{Batch, Difficulty, Event};

#[test]
fn test_generation_is_deterministic() {
    let seed = [7u8; 32];
    let difficulty = Difficulty { num_jets: 8 };
    let a = Event::generate_instance(&seed, &difficulty).unwrap();
    let b = Event::generate_instance(&seed, &difficulty).unwrap();
    assert_eq!(a.jets, b.jets);
}

#[test]
fn test_different_seeds_give_different_jets() {
    let difficulty = Difficulty { num_jets: 8 };
    let a = Event::generate_instance(&[1u8; 32], &difficulty).unwrap();
    let b = Event::generate_instance(&[2u8; 32], &difficulty).unwrap();
    assert_ne!(a.jets, b.jets);
}

#[test]
fn test_batch_shape() {
    let batch = Batch::generate_instance(&[3u8; 32], &Difficulty { num_jets: 11 }, 5).unwrap();
    assert_eq!(batch.events.len(), 5);
    for event in &batch.events {
        assert_eq!(event.jets.len(), 11);
    }
    // Per-event seeds are drawn from the batch rng, so events differ.
    assert_ne!(batch.events[0].jets, batch.events[1].jets);
}

#[test]
fn test_batch_rejects_too_few_jets() {
    assert!(Batch::generate_instance(&[0u8; 32], &Difficulty { num_jets: 2 }, 1).is_err());
}

#[test]
fn test_generated_jets_are_physical() {
    let event = Event::generate_instance(&[9u8; 32], &Difficulty { num_jets: 20 }).unwrap();
    for jet in &event.jets {
        assert!(jet.pt() >= 15.0 - 1e-9 && jet.pt() <= 250.0 + 1e-9);
        assert!(jet.eta().abs() <= 2.5 + 1e-9);
        assert!(jet.mass() > 0.0);
        assert!(jet.e >= jet.mass());
    }
}

#[test]
fn test_columns_match_jets() {
    let event = Event::generate_instance(&[5u8; 32], &Difficulty { num_jets: 6 }).unwrap();
    let columns = event.columns();
    assert_eq!(columns.pt.len(), 6);
    for (i, jet) in event.jets.iter().enumerate() {
        assert_eq!(columns.pt[i], jet.pt());
        assert_eq!(columns.eta[i], jet.eta());
        assert_eq!(columns.phi[i], jet.phi());
        assert_eq!(columns.mass[i], jet.mass());
    }
}
