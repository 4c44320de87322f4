//! Actors: the engine's own parallel solution machinery.

use crate::error::Result;

use super::interface;

interface! {
    Parallel
}

impl Parallel<'_> {
    dss_properties! { "Parallel";
        /// 1-based index of the actor receiving commands.
        rw i32 active_actor => ActiveActor;
        rw i32 active_parallel => ActiveParallel;
        rw i32 actor_cpu => ActorCPU;
        rw i32 concatenate_reports => ConcatenateReports;
        ro i32 num_cpus => NumCPUs;
        ro i32 num_cores => NumCores;
        ro i32 num_of_actors => NumOfActors;
        /// Progress of each actor, in percent.
        ro i32s actor_progress => ActorProgress;
        ro i32s actor_status => ActorStatus;
    }

    pub fn create_actor(&self) -> Result<()> {
        self.api.call("Parallel_CreateActor")
    }

    /// Block until every actor is idle.
    pub fn wait(&self) -> Result<()> {
        self.api.call("Parallel_Wait")
    }
}
