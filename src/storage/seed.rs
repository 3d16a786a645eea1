// ABOUTME: Demonstration data for the in-memory entity store
// ABOUTME: Seeds demo users, workouts, schedules, metrics, plans, billing, and the exercise library
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Acelera Fitness

//! Demonstration data set
//!
//! Populated once at process start: one demo student, one trainer, two
//! workouts scheduled for today, a metrics reading, a featured marketplace
//! plan, a points record, an active subscription with two payments, and an
//! 18-item exercise library spanning the seven muscle groups.
//!
//! Seed records use fixed ids ("user1", "workout1", ...) so the demo
//! identity configured in [`crate::config::ServerConfig`] resolves.

use super::memory::Collections;
use crate::models::{
    BodyMetrics, Difficulty, Exercise, Payment, Subscription, User, UserPoints, UserType,
    UserWorkout, Workout, WorkoutExercise, WorkoutPlan, WorkoutProgress,
};
use chrono::{Duration, Utc};

/// Fill the collections with the demonstration records
pub(super) fn populate(collections: &mut Collections) {
    let now = Utc::now();

    let user1 = User {
        id: "user1".into(),
        username: "joaosilva".into(),
        email: "joao@email.com".into(),
        password: "hashed_password".into(),
        first_name: "João".into(),
        last_name: "Silva".into(),
        user_type: UserType::Student,
        profile_image: Some(
            "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=100&h=100&fit=crop&crop=face"
                .into(),
        ),
        created_at: now,
    };

    let trainer1 = User {
        id: "trainer1".into(),
        username: "carlos_personal".into(),
        email: "carlos@email.com".into(),
        password: "hashed_password".into(),
        first_name: "Carlos".into(),
        last_name: "Personal".into(),
        user_type: UserType::Trainer,
        profile_image: Some(
            "https://images.unsplash.com/photo-1567013127542-490d757e51cd?w=100&h=100&fit=crop&crop=face"
                .into(),
        ),
        created_at: now,
    };

    collections.users.insert(user1.id.clone(), user1.clone());
    collections
        .users
        .insert(trainer1.id.clone(), trainer1.clone());

    let workout1 = Workout {
        id: "workout1".into(),
        name: "Treino de Peito".into(),
        description: Some("Treino focado no desenvolvimento do peitoral".into()),
        category: "chest".into(),
        duration: 45,
        difficulty: Difficulty::Intermediate,
        exercises: vec![
            WorkoutExercise {
                name: "Supino Reto".into(),
                sets: Some(4),
                reps: Some(12),
                weight: Some(80.0),
                duration: None,
                rest: None,
            },
            WorkoutExercise {
                name: "Supino Inclinado".into(),
                sets: Some(3),
                reps: Some(10),
                weight: Some(70.0),
                duration: None,
                rest: None,
            },
            WorkoutExercise {
                name: "Crucifixo".into(),
                sets: Some(3),
                reps: Some(15),
                weight: Some(25.0),
                duration: None,
                rest: None,
            },
        ],
        video_url: Some("https://example.com/chest-workout-video".into()),
        created_by: Some(trainer1.id.clone()),
        is_public: true,
        price: Some("0".into()),
        created_at: now,
    };

    let workout2 = Workout {
        id: "workout2".into(),
        name: "Cardio HIIT".into(),
        description: Some("Treino de cardio alta intensidade".into()),
        category: "cardio".into(),
        duration: 30,
        difficulty: Difficulty::Advanced,
        exercises: vec![
            WorkoutExercise {
                name: "Burpees".into(),
                sets: None,
                reps: None,
                weight: None,
                duration: Some(30),
                rest: Some(10),
            },
            WorkoutExercise {
                name: "Mountain Climbers".into(),
                sets: None,
                reps: None,
                weight: None,
                duration: Some(30),
                rest: Some(10),
            },
            WorkoutExercise {
                name: "Jump Squats".into(),
                sets: None,
                reps: None,
                weight: None,
                duration: Some(30),
                rest: Some(10),
            },
        ],
        video_url: Some("https://example.com/hiit-workout-video".into()),
        created_by: Some(trainer1.id.clone()),
        is_public: true,
        price: Some("0".into()),
        created_at: now,
    };

    collections
        .workouts
        .insert(workout1.id.clone(), workout1.clone());
    collections
        .workouts
        .insert(workout2.id.clone(), workout2.clone());

    // Two instances scheduled for today so the dashboard has data on first run
    collections.user_workouts.insert(
        "uw1".into(),
        UserWorkout {
            id: "uw1".into(),
            user_id: user1.id.clone(),
            workout_id: workout1.id.clone(),
            scheduled_date: Some(now),
            completed_date: None,
            progress: Some(WorkoutProgress {
                completed_exercises: 0,
                total_exercises: 3,
            }),
            notes: None,
        },
    );
    collections.user_workouts.insert(
        "uw2".into(),
        UserWorkout {
            id: "uw2".into(),
            user_id: user1.id.clone(),
            workout_id: workout2.id.clone(),
            scheduled_date: Some(now),
            completed_date: None,
            progress: Some(WorkoutProgress {
                completed_exercises: 3,
                total_exercises: 5,
            }),
            notes: None,
        },
    );

    collections.body_metrics.insert(
        "metrics1".into(),
        BodyMetrics {
            id: "metrics1".into(),
            user_id: user1.id.clone(),
            weight: Some("75.2".into()),
            body_fat: Some("12.5".into()),
            muscle_mass: Some("62.7".into()),
            hydration: Some("58.3".into()),
            measured_at: now,
        },
    );

    collections.workout_plans.insert(
        "plan1".into(),
        WorkoutPlan {
            id: "plan1".into(),
            name: "Hipertrofia Avançada".into(),
            description: Some(
                "Programa completo de 12 semanas para ganho de massa muscular".into(),
            ),
            trainer_id: Some(trainer1.id.clone()),
            duration: 12,
            price: "49.90".into(),
            rating: "4.8".into(),
            review_count: 124,
            workouts: vec![workout1.id.clone(), workout2.id.clone()],
            image_url: Some(
                "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400&h=250&fit=crop"
                    .into(),
            ),
            is_featured: true,
            created_at: now,
        },
    );

    collections.user_points.insert(
        "points1".into(),
        UserPoints {
            id: "points1".into(),
            user_id: user1.id.clone(),
            points: 1245,
            workouts_completed: 42,
            streak: 12,
            last_workout_date: Some(now),
        },
    );

    collections.subscriptions.insert(
        "sub1".into(),
        Subscription {
            id: "sub1".into(),
            user_id: user1.id.clone(),
            plan_name: "Premium".into(),
            plan_type: "monthly".into(),
            amount: "29.90".into(),
            status: "active".into(),
            start_date: now,
            end_date: now + Duration::days(30),
            payment_method: Some("credit_card".into()),
            created_at: now,
        },
    );

    // Previous cycle settled, current cycle pending
    collections.payments.insert(
        "pay1".into(),
        Payment {
            id: "pay1".into(),
            subscription_id: "sub1".into(),
            user_id: user1.id.clone(),
            amount: "29.90".into(),
            status: "paid".into(),
            payment_method: "credit_card".into(),
            transaction_id: Some("tx_123456789".into()),
            due_date: now - Duration::days(30),
            paid_date: Some(now - Duration::days(30)),
            created_at: now - Duration::days(30),
        },
    );
    collections.payments.insert(
        "pay2".into(),
        Payment {
            id: "pay2".into(),
            subscription_id: "sub1".into(),
            user_id: user1.id.clone(),
            amount: "29.90".into(),
            status: "pending".into(),
            payment_method: "credit_card".into(),
            transaction_id: None,
            due_date: now + Duration::days(30),
            paid_date: None,
            created_at: now,
        },
    );

    for exercise in exercise_library() {
        collections
            .exercises
            .insert(exercise.id.clone(), exercise);
    }
}

struct LibraryEntry {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    muscle_group: &'static str,
    equipment: &'static str,
    difficulty: Difficulty,
    instructions: &'static [&'static str],
    tips: &'static [&'static str],
    variations: &'static [&'static str],
}

impl LibraryEntry {
    fn build(&self) -> Exercise {
        Exercise {
            id: self.id.into(),
            name: self.name.into(),
            description: Some(self.description.into()),
            muscle_group: self.muscle_group.into(),
            equipment: Some(self.equipment.into()),
            difficulty: self.difficulty,
            instructions: self.instructions.iter().map(|s| (*s).into()).collect(),
            video_url: None,
            image_url: None,
            tips: self.tips.iter().map(|s| (*s).into()).collect(),
            variations: self.variations.iter().map(|s| (*s).into()).collect(),
            created_at: Utc::now(),
        }
    }
}

/// The fixed 18-exercise reference library, seven muscle groups
fn exercise_library() -> Vec<Exercise> {
    LIBRARY.iter().map(LibraryEntry::build).collect()
}

static LIBRARY: &[LibraryEntry] = &[
    // Chest
    LibraryEntry {
        id: "ex1",
        name: "Supino Reto com Barra",
        description: "Exercício fundamental para desenvolvimento do peitoral maior",
        muscle_group: "chest",
        equipment: "barbell",
        difficulty: Difficulty::Intermediate,
        instructions: &[
            "Deite no banco com os pés firmes no chão",
            "Segure a barra com pegada ligeiramente mais larga que os ombros",
            "Desça a barra até tocar o peito",
            "Empurre a barra para cima de forma controlada",
        ],
        tips: &[
            "Mantenha as escápulas retraídas",
            "Não rebata a barra no peito",
            "Respire fundo na descida e expire na subida",
        ],
        variations: &["Supino Inclinado", "Supino Declinado", "Supino com Halteres"],
    },
    LibraryEntry {
        id: "ex2",
        name: "Flexão de Braço",
        description: "Exercício básico de peso corporal para peito e tríceps",
        muscle_group: "chest",
        equipment: "bodyweight",
        difficulty: Difficulty::Beginner,
        instructions: &[
            "Posição de prancha com mãos na largura dos ombros",
            "Desça o corpo até o peito quase tocar o chão",
            "Empurre para cima até os braços estenderem",
            "Mantenha o corpo reto durante todo movimento",
        ],
        tips: &[
            "Mantenha o core contraído",
            "Olhe para frente, não para baixo",
            "Controle a descida",
        ],
        variations: &["Flexão Diamante", "Flexão Inclinada", "Flexão com Palmas"],
    },
    LibraryEntry {
        id: "ex3",
        name: "Crucifixo com Halteres",
        description: "Isolamento do peitoral com grande amplitude de movimento",
        muscle_group: "chest",
        equipment: "dumbbell",
        difficulty: Difficulty::Beginner,
        instructions: &[
            "Deite no banco segurando um halter em cada mão",
            "Abra os braços em arco com cotovelos levemente flexionados",
            "Desça até sentir o alongamento do peitoral",
            "Retorne pelo mesmo arco até os halteres se encontrarem",
        ],
        tips: &[
            "Não estenda completamente os cotovelos",
            "Use carga moderada para preservar os ombros",
        ],
        variations: &["Crucifixo Inclinado", "Crossover na Polia"],
    },
    // Back
    LibraryEntry {
        id: "ex4",
        name: "Barra Fixa",
        description: "Exercício completo para desenvolvimento do dorsal",
        muscle_group: "back",
        equipment: "bodyweight",
        difficulty: Difficulty::Intermediate,
        instructions: &[
            "Segure a barra com pegada pronada (palmas para frente)",
            "Puxe o corpo para cima até o queixo passar da barra",
            "Desça de forma controlada até os braços estenderem",
            "Mantenha o core contraído",
        ],
        tips: &[
            "Evite balançar o corpo",
            "Puxe com os músculos das costas",
            "Mantenha os ombros para baixo",
        ],
        variations: &["Barra Fixa Supinada", "Barra Fixa Neutra", "Barra Fixa Assistida"],
    },
    LibraryEntry {
        id: "ex5",
        name: "Levantamento Terra",
        description: "Exercício fundamental para toda a cadeia posterior",
        muscle_group: "back",
        equipment: "barbell",
        difficulty: Difficulty::Advanced,
        instructions: &[
            "Posicione os pés na largura do quadril",
            "Segure a barra com pegada mista ou pronada",
            "Mantenha as costas retas e levante pela extensão do quadril",
            "Termine em pé com ombros para trás",
        ],
        tips: &[
            "Inicie o movimento pelo quadril",
            "Mantenha a barra próxima ao corpo",
            "Não arredonde as costas",
        ],
        variations: &["Terra Romeno", "Terra Sumo", "Terra com Pegada Snatch"],
    },
    LibraryEntry {
        id: "ex6",
        name: "Remada Curvada",
        description: "Construtor de espessura para o meio das costas",
        muscle_group: "back",
        equipment: "barbell",
        difficulty: Difficulty::Intermediate,
        instructions: &[
            "Incline o tronco para frente com as costas retas",
            "Puxe a barra em direção ao abdômen",
            "Contraia as escápulas no topo",
            "Desça controladamente",
        ],
        tips: &[
            "Não use impulso do tronco",
            "Mantenha os joelhos levemente flexionados",
        ],
        variations: &["Remada com Halteres", "Remada Cavalinho", "Remada na Máquina"],
    },
    // Legs
    LibraryEntry {
        id: "ex7",
        name: "Agachamento Livre",
        description: "Rei dos exercícios para membros inferiores",
        muscle_group: "legs",
        equipment: "barbell",
        difficulty: Difficulty::Intermediate,
        instructions: &[
            "Posicione a barra nas costas (trapézio)",
            "Pés na largura do ombro, dedos levemente para fora",
            "Desça empurrando o quadril para trás",
            "Suba empurrando pelos calcanhares",
        ],
        tips: &[
            "Mantenha o joelho alinhado com o pé",
            "Desça até o quadril abaixo do joelho",
            "Mantenha o peito erguido",
        ],
        variations: &["Agachamento Frontal", "Agachamento Búlgaro", "Agachamento Goblet"],
    },
    LibraryEntry {
        id: "ex8",
        name: "Leg Press 45°",
        description: "Desenvolvimento de quadríceps e glúteos com suporte lombar",
        muscle_group: "legs",
        equipment: "machine",
        difficulty: Difficulty::Beginner,
        instructions: &[
            "Posicione os pés na plataforma na largura do quadril",
            "Destrave e desça até 90 graus de flexão do joelho",
            "Empurre a plataforma sem estender totalmente os joelhos",
        ],
        tips: &[
            "Não deixe o quadril descolar do banco",
            "Controle a fase de descida",
        ],
        variations: &["Leg Press Horizontal", "Leg Press Unilateral"],
    },
    LibraryEntry {
        id: "ex9",
        name: "Afundo",
        description: "Exercício unilateral para pernas e equilíbrio",
        muscle_group: "legs",
        equipment: "dumbbell",
        difficulty: Difficulty::Beginner,
        instructions: &[
            "Dê um passo à frente com um dos pés",
            "Desça até o joelho de trás quase tocar o chão",
            "Empurre pelo calcanhar da frente para voltar",
            "Alterne as pernas",
        ],
        tips: &[
            "Mantenha o tronco ereto",
            "O joelho da frente não deve passar da ponta do pé",
        ],
        variations: &["Afundo Caminhando", "Afundo Reverso", "Afundo Búlgaro"],
    },
    // Shoulders
    LibraryEntry {
        id: "ex10",
        name: "Desenvolvimento com Barra",
        description: "Exercício principal para desenvolvimento dos ombros",
        muscle_group: "shoulders",
        equipment: "barbell",
        difficulty: Difficulty::Intermediate,
        instructions: &[
            "Segure a barra na altura dos ombros",
            "Empurre a barra acima da cabeça",
            "Estenda completamente os braços",
            "Desça controladamente",
        ],
        tips: &[
            "Mantenha o core contraído",
            "Não arqueie excessivamente as costas",
            "Empurre a cabeça para frente na subida",
        ],
        variations: &[
            "Desenvolvimento com Halteres",
            "Desenvolvimento Arnold",
            "Desenvolvimento Sentado",
        ],
    },
    LibraryEntry {
        id: "ex11",
        name: "Elevação Lateral",
        description: "Isolamento da porção medial do deltoide",
        muscle_group: "shoulders",
        equipment: "dumbbell",
        difficulty: Difficulty::Beginner,
        instructions: &[
            "Em pé, segure um halter em cada mão ao lado do corpo",
            "Eleve os braços lateralmente até a altura dos ombros",
            "Desça devagar resistindo à gravidade",
        ],
        tips: &[
            "Não use impulso",
            "Cotovelos levemente flexionados durante todo o movimento",
        ],
        variations: &["Elevação Frontal", "Elevação Lateral na Polia"],
    },
    // Arms
    LibraryEntry {
        id: "ex12",
        name: "Rosca Direta com Barra",
        description: "Exercício básico para bíceps",
        muscle_group: "arms",
        equipment: "barbell",
        difficulty: Difficulty::Beginner,
        instructions: &[
            "Segure a barra com pegada supinada",
            "Mantenha os cotovelos junto ao corpo",
            "Flexione os braços levando a barra ao peito",
            "Desça controladamente",
        ],
        tips: &[
            "Não balance o corpo",
            "Mantenha os cotovelos fixos",
            "Contraia o bíceps no topo",
        ],
        variations: &["Rosca com Halteres", "Rosca Martelo", "Rosca Scott"],
    },
    LibraryEntry {
        id: "ex13",
        name: "Tríceps Testa",
        description: "Isolamento do tríceps com barra W",
        muscle_group: "arms",
        equipment: "barbell",
        difficulty: Difficulty::Intermediate,
        instructions: &[
            "Deite no banco com a barra acima do peito",
            "Flexione apenas os cotovelos descendo a barra até a testa",
            "Estenda os braços de volta à posição inicial",
        ],
        tips: &[
            "Mantenha os cotovelos apontados para cima",
            "Use carga moderada para proteger os cotovelos",
        ],
        variations: &["Tríceps Francês", "Tríceps na Polia", "Mergulho no Banco"],
    },
    LibraryEntry {
        id: "ex14",
        name: "Rosca Martelo",
        description: "Bíceps e antebraço com pegada neutra",
        muscle_group: "arms",
        equipment: "dumbbell",
        difficulty: Difficulty::Beginner,
        instructions: &[
            "Segure os halteres com as palmas voltadas uma para a outra",
            "Flexione os braços mantendo a pegada neutra",
            "Desça devagar até a extensão completa",
        ],
        tips: &["Evite balançar os cotovelos", "Alterne os braços se preferir"],
        variations: &["Rosca Martelo Cruzada", "Rosca Martelo na Polia"],
    },
    // Abs
    LibraryEntry {
        id: "ex15",
        name: "Prancha",
        description: "Exercício isométrico para core",
        muscle_group: "abs",
        equipment: "bodyweight",
        difficulty: Difficulty::Beginner,
        instructions: &[
            "Posição de flexão apoiado nos antebraços",
            "Mantenha o corpo em linha reta",
            "Contraia abdômen e glúteos",
            "Segure a posição pelo tempo determinado",
        ],
        tips: &[
            "Não eleve o quadril",
            "Mantenha respiração normal",
            "Contraia todo o core",
        ],
        variations: &[
            "Prancha Lateral",
            "Prancha com Elevação de Perna",
            "Prancha Dinâmica",
        ],
    },
    LibraryEntry {
        id: "ex16",
        name: "Abdominal Infra",
        description: "Ênfase na porção inferior do abdômen",
        muscle_group: "abs",
        equipment: "bodyweight",
        difficulty: Difficulty::Beginner,
        instructions: &[
            "Deite de costas com as mãos ao lado do corpo",
            "Eleve as pernas estendidas até 90 graus",
            "Desça devagar sem tocar o chão",
        ],
        tips: &["Pressione a lombar contra o chão", "Movimento lento e controlado"],
        variations: &["Elevação de Pernas na Barra", "Abdominal Canivete"],
    },
    // Cardio
    LibraryEntry {
        id: "ex17",
        name: "Burpee",
        description: "Exercício funcional de alta intensidade",
        muscle_group: "cardio",
        equipment: "bodyweight",
        difficulty: Difficulty::Intermediate,
        instructions: &[
            "Posição em pé",
            "Agache e coloque as mãos no chão",
            "Pule para posição de prancha",
            "Faça uma flexão",
            "Volte para agachamento e pule",
        ],
        tips: &[
            "Mantenha ritmo constante",
            "Não comprometa a forma",
            "Respire de forma controlada",
        ],
        variations: &["Burpee com Salto", "Half Burpee", "Burpee com Peso"],
    },
    LibraryEntry {
        id: "ex18",
        name: "Pular Corda",
        description: "Condicionamento cardiovascular e coordenação",
        muscle_group: "cardio",
        equipment: "bodyweight",
        difficulty: Difficulty::Beginner,
        instructions: &[
            "Segure a corda com os cotovelos próximos ao corpo",
            "Gire pelos punhos, não pelos ombros",
            "Salte baixo, apenas o suficiente para a corda passar",
        ],
        tips: &["Aterrisse na ponta dos pés", "Comece com séries curtas"],
        variations: &["Salto Alternado", "Dupla Passada", "Polichinelo"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_has_18_exercises_across_7_groups() {
        let library = exercise_library();
        assert_eq!(library.len(), 18);

        let groups: std::collections::HashSet<&str> = library
            .iter()
            .map(|e| e.muscle_group.as_str())
            .collect();
        assert_eq!(groups.len(), 7);
        for group in ["chest", "back", "legs", "shoulders", "arms", "abs", "cardio"] {
            assert!(groups.contains(group), "missing muscle group {group}");
        }
    }

    #[test]
    fn test_seed_references_resolve() {
        let mut collections = Collections::default();
        populate(&mut collections);

        for user_workout in collections.user_workouts.values() {
            assert!(collections.users.contains_key(&user_workout.user_id));
            assert!(collections.workouts.contains_key(&user_workout.workout_id));
        }
        for plan in collections.workout_plans.values() {
            assert!(plan
                .trainer_id
                .as_deref()
                .is_some_and(|id| collections.users.contains_key(id)));
            for workout_id in &plan.workouts {
                assert!(collections.workouts.contains_key(workout_id));
            }
        }
    }
}
