//! Solution control: solve commands, modes, time stepping and tolerances.

use crate::enums::SolveModes;
use crate::error::Result;

use super::interface;

interface! {
    Solution
}

impl Solution<'_> {
    dss_properties! { "Solution";
        ro bool system_y_changed => SystemYChanged;
        rw bool converged => Converged;
        rw bool control_actions_done => ControlActionsDone;
        /// Description of the current mode, e.g. `Snap`.
        ro string mode_id => ModeID;
        rw string ld_curve => LDCurve;
        rw string default_daily => DefaultDaily;
        rw string default_yearly => DefaultYearly;
        /// `1` power flow, `2` admittance.
        rw i32 load_model => LoadModel;
        /// `0` normal, `1` Newton.
        rw i32 algorithm => Algorithm;
        /// `0` static, `1` event, `2` time, `-1` off.
        rw i32 control_mode => ControlMode;
        rw i32 add_type => AddType;
        rw i32 random => Random;
        rw i32 hour => Hour;
        rw i32 year => Year;
        rw i32 number => Number;
        rw i32 max_iterations => MaxIterations;
        rw i32 min_iterations => MinIterations;
        rw i32 max_control_iterations => MaxControlIterations;
        rw i32 control_iterations => ControlIterations;
        ro i32 iterations => Iterations;
        ro i32 total_iterations => Totaliterations;
        ro i32 most_iterations_done => MostIterationsDone;
        rw f64 seconds => Seconds;
        rw f64 dbl_hour => dblHour;
        rw f64 step_size => StepSize;
        wo f64 step_size_hr => StepsizeHr;
        wo f64 step_size_min => StepsizeMin;
        rw f64 interval_hrs => IntervalHrs;
        rw f64 frequency => Frequency;
        rw f64 tolerance => Tolerance;
        rw f64 load_mult => LoadMult;
        rw f64 pct_growth => pctGrowth;
        rw f64 gen_kw => GenkW;
        rw f64 gen_pf => GenPF;
        rw f64 gen_mult => GenMult;
        rw f64 cap_kvar => Capkvar;
        /// Time of the last solution (ms).
        ro f64 process_time => Process_Time;
        rw f64 total_time => Total_Time;
        ro f64 time_of_step => Time_of_Step;
        ro i32s bus_levels => BusLevels;
        ro i32s inc_matrix => IncMatrix;
        ro i32s laplacian => Laplacian;
    }

    pub fn mode(&self) -> Result<SolveModes> {
        self.api.get_enum("Solution_Get_Mode")
    }

    pub fn set_mode(&self, mode: SolveModes) -> Result<()> {
        self.api.set_enum("Solution_Set_Mode", mode)
    }

    /// Solve in the current mode.
    pub fn solve(&self) -> Result<()> {
        self.api.call("Solution_Solve")
    }

    pub fn solve_snap(&self) -> Result<()> {
        self.api.call("Solution_SolveSnap")
    }

    pub fn solve_direct(&self) -> Result<()> {
        self.api.call("Solution_SolveDirect")
    }

    pub fn solve_power_flow(&self) -> Result<()> {
        self.api.call("Solution_SolvePflow")
    }

    pub fn solve_no_control(&self) -> Result<()> {
        self.api.call("Solution_SolveNoControl")
    }

    pub fn solve_plus_control(&self) -> Result<()> {
        self.api.call("Solution_SolvePlusControl")
    }

    /// Solve every actor; single-actor engines treat it as `solve`.
    pub fn solve_all(&self) -> Result<()> {
        self.api.call("Solution_SolveAll")
    }

    pub fn init_snap(&self) -> Result<()> {
        self.api.call("Solution_InitSnap")
    }

    pub fn check_controls(&self) -> Result<()> {
        self.api.call("Solution_CheckControls")
    }

    pub fn check_fault_status(&self) -> Result<()> {
        self.api.call("Solution_CheckFaultStatus")
    }

    pub fn do_control_actions(&self) -> Result<()> {
        self.api.call("Solution_DoControlActions")
    }

    pub fn sample_control_devices(&self) -> Result<()> {
        self.api.call("Solution_SampleControlDevices")
    }

    pub fn sample_do_control_actions(&self) -> Result<()> {
        self.api.call("Solution_Sample_DoControlActions")
    }

    pub fn finish_time_step(&self) -> Result<()> {
        self.api.call("Solution_FinishTimeStep")
    }

    pub fn cleanup(&self) -> Result<()> {
        self.api.call("Solution_Cleanup")
    }

    /// Rebuild the system Y matrix. `build_option` 0 builds the series
    /// matrix only, 1 the whole system.
    pub fn build_y_matrix(&self, build_option: i32, allocate_vi: bool) -> Result<()> {
        self.api
            .call_i32_pair("Solution_BuildYMatrix", build_option, i32::from(allocate_vi))
    }
}
