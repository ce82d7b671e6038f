//! Short rules reference for each condition kind.

use tracker_core::ConditionKind;

/// One-paragraph summary of what a condition does.
pub fn describe(kind: ConditionKind) -> &'static str {
    match kind {
        ConditionKind::Bleed => {
            "Takes the listed damage at the start of each of its turns until stopped by a DC 15 Heal check or any healing effect. Bleeds of the same damage type do not stack; the worse one applies."
        }
        ConditionKind::Blinded => {
            "Cannot see. -2 to AC, loses Dex bonus to AC, -4 on most Str- and Dex-based skill checks and opposed Perception checks. Every opponent has total concealment. Moving faster than half speed needs a DC 10 Acrobatics check or the creature falls prone."
        }
        ConditionKind::Broken => {
            "An item damaged past half its hit points. Weapons take -2 on attack and damage and only crit on a natural 20 for x2; armor and shields grant half their bonus with double check penalty; tools impose -2; wands and staves spend double charges."
        }
        ConditionKind::Confused => {
            "Cannot tell friend from foe. At the start of each turn roll d100: 01-25 act normally, 26-50 babble, 51-75 deal 1d8 + Str to self, 76-100 attack the nearest creature. Attacks back whoever last attacked it."
        }
        ConditionKind::Cowering => {
            "Frozen in fear and can take no actions. -2 to AC and loses Dex bonus to AC."
        }
        ConditionKind::Dazed => {
            "Can take no actions but suffers no AC penalty. Usually lasts 1 round."
        }
        ConditionKind::Dazzled => {
            "Over-stimulated eyes: -1 on attack rolls and sight-based Perception checks."
        }
        ConditionKind::Dead => {
            "Hit points at or below negative Constitution, Constitution 0, or slain outright. Cannot benefit from healing; only magic can restore life."
        }
        ConditionKind::Deafened => {
            "Cannot hear. -4 on initiative and opposed Perception checks, fails sound-based Perception, 20% spell failure on verbal spells."
        }
        ConditionKind::Disabled => {
            "At 0 hit points, or stable and conscious below 0. One move or standard action per round at half speed; strenuous actions deal 1 damage afterwards."
        }
        ConditionKind::Dying => {
            "Unconscious with negative hit points and not stable. Each turn makes a DC 10 Con check (penalty equal to negative hit points) to stabilize, losing 1 hit point on a failure."
        }
        ConditionKind::EnergyDrained => {
            "Has one or more negative levels, which may become permanent. Dies if negative levels reach its Hit Dice."
        }
        ConditionKind::Entangled => {
            "Ensnared: half speed, no running or charging, -2 on attacks, -4 Dex. Casting needs a concentration check (DC 15 + spell level)."
        }
        ConditionKind::Exhausted => {
            "Half speed, no running or charging, -6 Str and Dex. Becomes fatigued after 1 hour of complete rest."
        }
        ConditionKind::Fascinated => {
            "Entranced: takes no actions but watches the effect, -4 on reactive skill checks. Any potential threat grants a new save; an obvious threat ends it."
        }
        ConditionKind::Fatigued => {
            "Cannot run or charge, -2 Str and Dex. Further fatigue makes it exhausted; 8 hours of rest removes it."
        }
        ConditionKind::FlatFooted => {
            "Has not acted yet in combat: loses Dex bonus to AC and CMD and cannot make attacks of opportunity."
        }
        ConditionKind::Frightened => {
            "Flees from the source of fear if possible, fights only if cornered. -2 on attacks, saves, skill and ability checks."
        }
        ConditionKind::Grappled => {
            "Cannot move, -4 Dex, -2 on attacks and most combat maneuvers, no two-handed actions, no attacks of opportunity. Casting needs a concentration check (DC 10 + grappler's CMB + spell level)."
        }
        ConditionKind::Helpless => {
            "Paralyzed, bound, asleep or unconscious: treated as Dex 0. Melee attacks get +4 against it and it is open to a coup de grace."
        }
        ConditionKind::Incorporeal => {
            "No physical body. Immune to nonmagical attacks, takes half damage from magical sources, full damage from force and other incorporeal effects."
        }
        ConditionKind::Invisible => {
            "Visually undetectable. +2 on attacks against sighted foes and ignores their Dex bonus to AC."
        }
        ConditionKind::Nauseated => {
            "Cannot attack, cast, concentrate or do anything requiring attention. Only a single move action per turn."
        }
        ConditionKind::Panicked => {
            "Drops what it holds and flees at top speed along a random path. -2 on saves, skill and ability checks; cowers if cornered."
        }
        ConditionKind::Paralyzed => {
            "Frozen in place: effective Str and Dex 0, helpless, only purely mental actions. Flyers fall, swimmers may drown."
        }
        ConditionKind::Petrified => {
            "Turned to stone and considered unconscious. Missing pieces on restoration cause lasting harm."
        }
        ConditionKind::Pinned => {
            "Tightly bound: cannot move, loses Dex bonus, an extra -4 to AC, only verbal and mental actions. Casting needs a concentration check. A more severe grapple."
        }
        ConditionKind::Prone => {
            "Lying on the ground: -4 on melee attacks, no ranged weapons except crossbows, +4 AC against ranged and -4 AC against melee. Standing provokes."
        }
        ConditionKind::Shaken => {
            "-2 on attack rolls, saving throws, skill checks and ability checks. The mildest state of fear."
        }
        ConditionKind::Sickened => {
            "-2 on attack rolls, weapon damage, saving throws, skill checks and ability checks."
        }
        ConditionKind::Stable => {
            "No longer dying but still unconscious with negative hit points. Hourly DC 10 Con checks to wake up disabled."
        }
        ConditionKind::Staggered => {
            "A single move or standard action each round, plus free, swift and immediate actions."
        }
        ConditionKind::Stunned => {
            "Drops everything held, takes no actions, -2 to AC and loses Dex bonus. Attackers get +4 on combat maneuvers against it."
        }
        ConditionKind::Unconscious => {
            "Knocked out and helpless, from negative hit points or nonlethal damage exceeding current hit points."
        }
    }
}
