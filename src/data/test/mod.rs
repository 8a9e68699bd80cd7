mod camera;
mod guild_settings;
mod pomodoro;
mod reaction_role;
mod rollup_checkpoint;
mod time_activity;
