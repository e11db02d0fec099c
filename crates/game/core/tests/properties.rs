use battle_core::{
    Armor, Battle, Combatant, CombatantId, DamageType, Skill, Stats, StatusEffect, Team, Weapon,
    engine::turn_order,
};
use proptest::prelude::*;

fn damage_type() -> impl Strategy<Value = DamageType> {
    prop_oneof![
        Just(DamageType::Physical),
        Just(DamageType::Magic),
        Just(DamageType::Pure),
    ]
}

#[derive(Clone, Debug)]
struct Profile {
    hp: u32,
    mp: u32,
    attack: i32,
    defense: i32,
    resistance: i32,
    speed: i32,
    crit: f64,
    weapon: Option<(i32, i32, DamageType)>,
    skill: Option<(u32, f64, DamageType, u32)>,
}

fn profile() -> impl Strategy<Value = Profile> {
    (
        1u32..80,
        0u32..30,
        0i32..12,
        -5i32..12,
        -5i32..12,
        0i32..12,
        0.0f64..0.5,
        proptest::option::of((0i32..5, 0i32..8, damage_type())),
        // Nonzero cost keeps total healing finite.
        proptest::option::of((1u32..10, 0.0f64..2.5, damage_type(), 0u32..10)),
    )
        .prop_map(
            |(hp, mp, attack, defense, resistance, speed, crit, weapon, skill)| Profile {
                hp,
                mp,
                attack,
                defense,
                resistance,
                speed,
                crit,
                weapon,
                skill,
            },
        )
}

fn spawn(id: u32, team: Team, p: &Profile) -> Combatant {
    let stats = Stats::builder()
        .max_hp(p.hp)
        .max_mp(p.mp)
        .attack(p.attack)
        .defense(p.defense)
        .resistance(p.resistance)
        .speed(p.speed)
        .crit(p.crit, 1.5)
        .build();
    let mut c = Combatant::new(CombatantId(id), format!("C{id}"), team, stats);
    if let Some((min, max, kind)) = p.weapon {
        c = c.with_weapon(Weapon::new("Blade", min, max, kind));
    }
    if let Some((cost, mult, kind, heal)) = p.skill {
        let mut skill = Skill::damage("art", "Art", cost, mult, kind);
        skill.heal_amount = heal;
        c = c.with_skill(skill);
    }
    c
}

proptest! {
    #[test]
    fn every_hit_deals_at_least_one_and_keeps_hp_in_bounds(
        raw in -50i32..500,
        defense in -20i32..200,
        resistance in -20i32..200,
        kind in damage_type(),
        hp in 1u32..300,
    ) {
        let stats = Stats::builder()
            .max_hp(hp)
            .defense(defense)
            .resistance(resistance)
            .build();
        let mut target = Combatant::new(CombatantId(1), "T", Team::Enemy, stats);

        let outcome = target.take_damage(raw, kind);

        prop_assert!(outcome.dealt >= 1);
        prop_assert!(target.stats.hp <= target.stats.max_hp);
        prop_assert_eq!(target.stats.hp, hp.saturating_sub(outcome.dealt));
        prop_assert_eq!(outcome.killed, !target.is_alive());
    }

    #[test]
    fn battles_terminate_with_monotonic_rounds(
        players in proptest::collection::vec(profile(), 1..4),
        enemies in proptest::collection::vec(profile(), 1..4),
        seed in any::<u64>(),
    ) {
        let players: Vec<_> = players
            .iter()
            .enumerate()
            .map(|(i, p)| spawn(i as u32, Team::Player, p))
            .collect();
        let enemies: Vec<_> = enemies
            .iter()
            .enumerate()
            .map(|(i, p)| spawn(100 + i as u32, Team::Enemy, p))
            .collect();
        let mut battle = Battle::builder()
            .players(players)
            .enemies(enemies)
            .seed(seed)
            .build()
            .unwrap();

        let mut previous = battle.round();
        while !battle.is_over() {
            battle.run_round();
            prop_assert_eq!(battle.round(), previous + 1);
            previous = battle.round();
            prop_assert!(previous < 10_000, "battle did not converge");
            for c in battle.combatants() {
                prop_assert!(c.stats.hp <= c.stats.max_hp);
                prop_assert!(c.stats.mp <= c.stats.max_mp);
                prop_assert_eq!(c.is_alive(), c.stats.hp > 0);
            }
        }

        let winner = battle.winner().unwrap();
        prop_assert!(battle.is_roster_defeated(winner.opponent()));
        if winner == Team::Player {
            prop_assert!(!battle.is_roster_defeated(Team::Player));
        }
    }

    #[test]
    fn turn_order_is_non_increasing_in_speed(
        speeds in proptest::collection::vec(-10i32..30, 1..12),
    ) {
        let all: Vec<_> = speeds
            .iter()
            .enumerate()
            .map(|(i, &speed)| {
                let stats = Stats::builder().max_hp(5).speed(speed).build();
                let team = if i % 2 == 0 { Team::Player } else { Team::Enemy };
                Combatant::new(CombatantId(i as u32), format!("C{i}"), team, stats)
            })
            .collect();

        let order = turn_order(&all);
        prop_assert_eq!(order.len(), all.len());
        for pair in order.windows(2) {
            let (a, b) = (&all[pair[0]], &all[pair[1]]);
            prop_assert!(a.effective_speed() >= b.effective_speed());
            if a.effective_speed() == b.effective_speed() {
                prop_assert!(pair[0] < pair[1]);
            }
        }
    }

    #[test]
    fn armor_round_trip_restores_hp(
        max_hp in 1u32..200,
        missing in 0u32..200,
        bonus in 0u32..50,
    ) {
        let stats = Stats::builder().max_hp(max_hp).build();
        let mut c = Combatant::new(CombatantId(1), "C", Team::Player, stats);
        c.stats.hp = max_hp.saturating_sub(missing).max(1);
        let before = (c.stats.max_hp, c.stats.hp);

        c.equip_armor(Armor::new("Shell").with_hp_bonus(bonus));
        prop_assert_eq!(c.stats.max_hp, before.0 + bonus);
        prop_assert_eq!(c.stats.hp, before.1 + bonus);

        c.unequip_armor();
        prop_assert_eq!((c.stats.max_hp, c.stats.hp), before);
    }

    #[test]
    fn effects_expire_after_exactly_their_duration(duration in 1u32..20) {
        let mut c = Combatant::new(
            CombatantId(1),
            "C",
            Team::Player,
            Stats::builder().max_hp(1_000).build(),
        );
        prop_assert!(c.add_effect(StatusEffect::new("Mark", duration)));

        let mut battle = Battle::builder()
            .player(c)
            .enemy(Combatant::new(
                CombatantId(2),
                "Wall",
                Team::Enemy,
                Stats::builder().max_hp(1_000_000).defense(1_000).build(),
            ))
            .build()
            .unwrap();

        for tick in 1..=duration {
            battle.run_round();
            let present = battle.players()[0].effects().contains("Mark");
            prop_assert_eq!(present, tick < duration);
        }
    }
}
