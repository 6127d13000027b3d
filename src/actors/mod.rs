mod evaluation_actor;

pub use evaluation_actor::EvaluationActor;
