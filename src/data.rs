use crate::network::attributes::AttributeTag;
use crate::network::SpawnTrajectory;

/// Archetypes and level objects that are instances of a class with a net cache entry
pub(crate) static OBJECT_CLASSES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "Archetypes.Ball.Ball_Anniversary" => "TAGame.Ball_TA",
    "Archetypes.Ball.Ball_Basketball" => "TAGame.Ball_TA",
    "Archetypes.Ball.Ball_BasketBall_Mutator" => "TAGame.Ball_TA",
    "Archetypes.Ball.Ball_Breakout" => "TAGame.Ball_Breakout_TA",
    "Archetypes.Ball.Ball_Default" => "TAGame.Ball_TA",
    "Archetypes.Ball.Ball_Haunted" => "TAGame.Ball_Haunted_TA",
    "Archetypes.Ball.Ball_Puck" => "TAGame.Ball_TA",
    "Archetypes.Ball.CubeBall" => "TAGame.Ball_TA",
    "Archetypes.Car.Car_Default" => "TAGame.Car_TA",
    "Archetypes.Car.Car_PostGameLobby" => "TAGame.Car_TA",
    "Archetypes.CarComponents.CarComponent_Boost" => "TAGame.CarComponent_Boost_TA",
    "Archetypes.CarComponents.CarComponent_Dodge" => "TAGame.CarComponent_Dodge_TA",
    "Archetypes.CarComponents.CarComponent_DoubleJump" => "TAGame.CarComponent_DoubleJump_TA",
    "Archetypes.CarComponents.CarComponent_FlipCar" => "TAGame.CarComponent_FlipCar_TA",
    "Archetypes.CarComponents.CarComponent_Jump" => "TAGame.CarComponent_Jump_TA",
    "Archetypes.GameEvent.GameEvent_Basketball" => "TAGame.GameEvent_Soccar_TA",
    "Archetypes.GameEvent.GameEvent_BasketballPrivate" => "TAGame.GameEvent_SoccarPrivate_TA",
    "Archetypes.GameEvent.GameEvent_BasketballSplitscreen" => "TAGame.GameEvent_SoccarSplitscreen_TA",
    "Archetypes.GameEvent.GameEvent_Breakout" => "TAGame.GameEvent_Soccar_TA",
    "Archetypes.GameEvent.GameEvent_Hockey" => "TAGame.GameEvent_Soccar_TA",
    "Archetypes.GameEvent.GameEvent_HockeyPrivate" => "TAGame.GameEvent_SoccarPrivate_TA",
    "Archetypes.GameEvent.GameEvent_HockeySplitscreen" => "TAGame.GameEvent_SoccarSplitscreen_TA",
    "Archetypes.GameEvent.GameEvent_Items" => "TAGame.GameEvent_Soccar_TA",
    "Archetypes.GameEvent.GameEvent_Season" => "TAGame.GameEvent_Season_TA",
    "Archetypes.GameEvent.GameEvent_Season:CarArchetype" => "TAGame.Car_TA",
    "Archetypes.GameEvent.GameEvent_Soccar" => "TAGame.GameEvent_Soccar_TA",
    "Archetypes.GameEvent.GameEvent_SoccarLan" => "TAGame.GameEvent_SoccarPrivate_TA",
    "Archetypes.GameEvent.GameEvent_SoccarPrivate" => "TAGame.GameEvent_SoccarPrivate_TA",
    "Archetypes.GameEvent.GameEvent_SoccarSplitscreen" => "TAGame.GameEvent_SoccarSplitscreen_TA",
    "Archetypes.SpecialPickups.SpecialPickup_BallFreeze" => "TAGame.SpecialPickup_BallFreeze_TA",
    "Archetypes.SpecialPickups.SpecialPickup_BallGrapplingHook" => "TAGame.SpecialPickup_GrapplingHook_TA",
    "Archetypes.SpecialPickups.SpecialPickup_BallLasso" => "TAGame.SpecialPickup_BallLasso_TA",
    "Archetypes.SpecialPickups.SpecialPickup_BallSpring" => "TAGame.SpecialPickup_BallCarSpring_TA",
    "Archetypes.SpecialPickups.SpecialPickup_BallVelcro" => "TAGame.SpecialPickup_BallVelcro_TA",
    "Archetypes.SpecialPickups.SpecialPickup_Batarang" => "TAGame.SpecialPickup_Batarang_TA",
    "Archetypes.SpecialPickups.SpecialPickup_BoostOverride" => "TAGame.SpecialPickup_BoostOverride_TA",
    "Archetypes.SpecialPickups.SpecialPickup_CarSpring" => "TAGame.SpecialPickup_BallCarSpring_TA",
    "Archetypes.SpecialPickups.SpecialPickup_GravityWell" => "TAGame.SpecialPickup_BallGravity_TA",
    "Archetypes.SpecialPickups.SpecialPickup_StrongHit" => "TAGame.SpecialPickup_HitForce_TA",
    "Archetypes.SpecialPickups.SpecialPickup_Swapper" => "TAGame.SpecialPickup_Swapper_TA",
    "Archetypes.SpecialPickups.SpecialPickup_Tornado" => "TAGame.SpecialPickup_Tornado_TA",
    "Archetypes.Teams.Team0" => "TAGame.Team_Soccar_TA",
    "Archetypes.Teams.Team1" => "TAGame.Team_Soccar_TA",
    "GameInfo_Basketball.GameInfo.GameInfo_Basketball:GameReplicationInfoArchetype" => "TAGame.GRI_TA",
    "GameInfo_Breakout.GameInfo.GameInfo_Breakout:GameReplicationInfoArchetype" => "TAGame.GRI_TA",
    "Gameinfo_Hockey.GameInfo.Gameinfo_Hockey:GameReplicationInfoArchetype" => "TAGame.GRI_TA",
    "GameInfo_Items.GameInfo.GameInfo_Items:GameReplicationInfoArchetype" => "TAGame.GRI_TA",
    "GameInfo_Season.GameInfo.GameInfo_Season:GameReplicationInfoArchetype" => "TAGame.GRI_TA",
    "GameInfo_Soccar.GameInfo.GameInfo_Soccar:GameReplicationInfoArchetype" => "TAGame.GRI_TA",
    "TAGame.Default__CameraSettingsActor_TA" => "TAGame.CameraSettingsActor_TA",
    "TAGame.Default__MaxTimeWarningData_TA" => "TAGame.MaxTimeWarningData_TA",
    "TAGame.Default__PickupTimer_TA" => "TAGame.PickupTimer_TA",
    "TAGame.Default__PRI_TA" => "TAGame.PRI_TA",
    "TAGame.Default__RumblePickups_TA" => "TAGame.RumblePickups_TA",
    "TheWorld:PersistentLevel.BreakOutActor_Platform_TA" => "TAGame.BreakOutActor_Platform_TA",
    "TheWorld:PersistentLevel.CrowdActor_TA" => "TAGame.CrowdActor_TA",
    "TheWorld:PersistentLevel.CrowdManager_TA" => "TAGame.CrowdManager_TA",
    "TheWorld:PersistentLevel.InMapScoreboard_TA" => "TAGame.InMapScoreboard_TA",
    "TheWorld:PersistentLevel.VehiclePickup_Boost_TA" => "TAGame.VehiclePickup_Boost_TA",
};

/// What a new actor of a class sends along with its spawn. Classes that are absent send nothing.
pub(crate) static SPAWN_STATS: phf::Map<&'static str, SpawnTrajectory> = phf::phf_map! {
    "TAGame.Ball_Breakout_TA" => SpawnTrajectory::LocationAndRotation,
    "TAGame.Ball_Haunted_TA" => SpawnTrajectory::LocationAndRotation,
    "TAGame.Ball_TA" => SpawnTrajectory::LocationAndRotation,
    "TAGame.Car_Season_TA" => SpawnTrajectory::LocationAndRotation,
    "TAGame.Car_TA" => SpawnTrajectory::LocationAndRotation,
    "TAGame.CameraSettingsActor_TA" => SpawnTrajectory::Location,
    "TAGame.CarComponent_Boost_TA" => SpawnTrajectory::Location,
    "TAGame.CarComponent_Dodge_TA" => SpawnTrajectory::Location,
    "TAGame.CarComponent_DoubleJump_TA" => SpawnTrajectory::Location,
    "TAGame.CarComponent_FlipCar_TA" => SpawnTrajectory::Location,
    "TAGame.CarComponent_Jump_TA" => SpawnTrajectory::Location,
    "TAGame.GameEvent_Season_TA" => SpawnTrajectory::Location,
    "TAGame.GameEvent_Soccar_TA" => SpawnTrajectory::Location,
    "TAGame.GameEvent_SoccarPrivate_TA" => SpawnTrajectory::Location,
    "TAGame.GameEvent_SoccarSplitscreen_TA" => SpawnTrajectory::Location,
    "TAGame.GRI_TA" => SpawnTrajectory::Location,
    "TAGame.MaxTimeWarningData_TA" => SpawnTrajectory::Location,
    "TAGame.PickupTimer_TA" => SpawnTrajectory::Location,
    "TAGame.PRI_TA" => SpawnTrajectory::Location,
    "TAGame.RumblePickups_TA" => SpawnTrajectory::Location,
    "TAGame.SpecialPickup_BallCarSpring_TA" => SpawnTrajectory::Location,
    "TAGame.SpecialPickup_BallFreeze_TA" => SpawnTrajectory::Location,
    "TAGame.SpecialPickup_BallGravity_TA" => SpawnTrajectory::Location,
    "TAGame.SpecialPickup_BallLasso_TA" => SpawnTrajectory::Location,
    "TAGame.SpecialPickup_BallVelcro_TA" => SpawnTrajectory::Location,
    "TAGame.SpecialPickup_Batarang_TA" => SpawnTrajectory::Location,
    "TAGame.SpecialPickup_BoostOverride_TA" => SpawnTrajectory::Location,
    "TAGame.SpecialPickup_GrapplingHook_TA" => SpawnTrajectory::Location,
    "TAGame.SpecialPickup_HitForce_TA" => SpawnTrajectory::Location,
    "TAGame.SpecialPickup_Swapper_TA" => SpawnTrajectory::Location,
    "TAGame.SpecialPickup_Tornado_TA" => SpawnTrajectory::Location,
    "TAGame.Team_Soccar_TA" => SpawnTrajectory::Location,
};

/// How each replicated property is encoded. Properties that are absent have no decoder.
pub(crate) static ATTRIBUTES: phf::Map<&'static str, AttributeTag> = phf::phf_map! {
    "Engine.Actor:bBlockActors" => AttributeTag::Boolean,
    "Engine.Actor:bCollideActors" => AttributeTag::Boolean,
    "Engine.Actor:bHidden" => AttributeTag::Boolean,
    "Engine.Actor:bTearOff" => AttributeTag::Boolean,
    "Engine.Actor:DrawScale" => AttributeTag::Float,
    "Engine.Actor:Role" => AttributeTag::Enum,
    "Engine.GameReplicationInfo:bMatchIsOver" => AttributeTag::Boolean,
    "Engine.GameReplicationInfo:GameClass" => AttributeTag::ActiveActor,
    "Engine.GameReplicationInfo:ServerName" => AttributeTag::String,
    "Engine.Pawn:PlayerReplicationInfo" => AttributeTag::ActiveActor,
    "Engine.PlayerReplicationInfo:bAdmin" => AttributeTag::Boolean,
    "Engine.PlayerReplicationInfo:bBot" => AttributeTag::Boolean,
    "Engine.PlayerReplicationInfo:bIsInactive" => AttributeTag::Boolean,
    "Engine.PlayerReplicationInfo:bIsSpectator" => AttributeTag::Boolean,
    "Engine.PlayerReplicationInfo:bOutOfLives" => AttributeTag::Boolean,
    "Engine.PlayerReplicationInfo:bReadyToPlay" => AttributeTag::Boolean,
    "Engine.PlayerReplicationInfo:bWaitingPlayer" => AttributeTag::Boolean,
    "Engine.PlayerReplicationInfo:Ping" => AttributeTag::Byte,
    "Engine.PlayerReplicationInfo:PlayerID" => AttributeTag::Int,
    "Engine.PlayerReplicationInfo:PlayerName" => AttributeTag::String,
    "Engine.PlayerReplicationInfo:RemoteUserData" => AttributeTag::String,
    "Engine.PlayerReplicationInfo:Score" => AttributeTag::Int,
    "Engine.PlayerReplicationInfo:Team" => AttributeTag::ActiveActor,
    "Engine.PlayerReplicationInfo:UniqueId" => AttributeTag::UniqueId,
    "Engine.ReplicatedActor_ORS:ReplicatedOwner" => AttributeTag::ActiveActor,
    "Engine.TeamInfo:Score" => AttributeTag::Int,
    "ProjectX.GRI_X:bGameStarted" => AttributeTag::Boolean,
    "ProjectX.GRI_X:GameServerID" => AttributeTag::QWord,
    "ProjectX.GRI_X:MatchGUID" => AttributeTag::String,
    "ProjectX.GRI_X:ReplicatedGameMutatorIndex" => AttributeTag::Int,
    "ProjectX.GRI_X:ReplicatedGamePlaylist" => AttributeTag::Int,
    "ProjectX.GRI_X:ReplicatedServerRegion" => AttributeTag::String,
    "ProjectX.GRI_X:Reservations" => AttributeTag::Reservation,
    "TAGame.Ball_Breakout_TA:AppliedDamage" => AttributeTag::AppliedDamage,
    "TAGame.Ball_Breakout_TA:DamageIndex" => AttributeTag::Int,
    "TAGame.Ball_Breakout_TA:LastTeamTouch" => AttributeTag::Byte,
    "TAGame.Ball_TA:bEndOfGameHidden" => AttributeTag::Boolean,
    "TAGame.Ball_TA:GameEvent" => AttributeTag::ActiveActor,
    "TAGame.Ball_TA:HitTeamNum" => AttributeTag::Byte,
    "TAGame.Ball_TA:ReplicatedAddedCarBounceScale" => AttributeTag::Float,
    "TAGame.Ball_TA:ReplicatedBallGravityScale" => AttributeTag::Float,
    "TAGame.Ball_TA:ReplicatedBallMaxLinearSpeedScale" => AttributeTag::Float,
    "TAGame.Ball_TA:ReplicatedBallScale" => AttributeTag::Float,
    "TAGame.Ball_TA:ReplicatedExplosionData" => AttributeTag::Explosion,
    "TAGame.Ball_TA:ReplicatedExplosionDataExtended" => AttributeTag::ExtendedExplosion,
    "TAGame.Ball_TA:ReplicatedPhysMatOverride" => AttributeTag::ActiveActor,
    "TAGame.Ball_TA:ReplicatedWorldBounceScale" => AttributeTag::Float,
    "TAGame.BreakOutActor_Platform_TA:DamageState" => AttributeTag::DamageState,
    "TAGame.CameraSettingsActor_TA:bMouseCameraToggleEnabled" => AttributeTag::Boolean,
    "TAGame.CameraSettingsActor_TA:bResetCamera" => AttributeTag::Boolean,
    "TAGame.CameraSettingsActor_TA:bUsingBehindView" => AttributeTag::Boolean,
    "TAGame.CameraSettingsActor_TA:bUsingSecondaryCamera" => AttributeTag::Boolean,
    "TAGame.CameraSettingsActor_TA:bUsingSwivel" => AttributeTag::Boolean,
    "TAGame.CameraSettingsActor_TA:CameraPitch" => AttributeTag::Byte,
    "TAGame.CameraSettingsActor_TA:CameraYaw" => AttributeTag::Byte,
    "TAGame.CameraSettingsActor_TA:PRI" => AttributeTag::ActiveActor,
    "TAGame.CameraSettingsActor_TA:ProfileSettings" => AttributeTag::CamSettings,
    "TAGame.Car_TA:AddedBallForceMultiplier" => AttributeTag::Float,
    "TAGame.Car_TA:AddedCarForceMultiplier" => AttributeTag::Float,
    "TAGame.Car_TA:bOverrideBoostOn" => AttributeTag::Boolean,
    "TAGame.Car_TA:bOverrideHandbrakeOn" => AttributeTag::Boolean,
    "TAGame.Car_TA:ClubColors" => AttributeTag::ClubColors,
    "TAGame.Car_TA:ReplicatedDemolish" => AttributeTag::Demolish,
    "TAGame.Car_TA:RumblePickups" => AttributeTag::ActiveActor,
    "TAGame.Car_TA:TeamPaint" => AttributeTag::TeamPaint,
    "TAGame.CarComponent_Boost_TA:bNoBoost" => AttributeTag::Boolean,
    "TAGame.CarComponent_Boost_TA:BoostModifier" => AttributeTag::Float,
    "TAGame.CarComponent_Boost_TA:bUnlimitedBoost" => AttributeTag::Boolean,
    "TAGame.CarComponent_Boost_TA:RechargeDelay" => AttributeTag::Float,
    "TAGame.CarComponent_Boost_TA:RechargeRate" => AttributeTag::Float,
    "TAGame.CarComponent_Boost_TA:ReplicatedBoostAmount" => AttributeTag::Byte,
    "TAGame.CarComponent_Boost_TA:UnlimitedBoostRefCount" => AttributeTag::Int,
    "TAGame.CarComponent_Dodge_TA:DodgeTorque" => AttributeTag::Location,
    "TAGame.CarComponent_FlipCar_TA:bFlipRight" => AttributeTag::Boolean,
    "TAGame.CarComponent_FlipCar_TA:FlipCarTime" => AttributeTag::Float,
    "TAGame.CarComponent_TA:ReplicatedActive" => AttributeTag::Byte,
    "TAGame.CarComponent_TA:ReplicatedActivityTime" => AttributeTag::Float,
    "TAGame.CarComponent_TA:Vehicle" => AttributeTag::ActiveActor,
    "TAGame.CrowdActor_TA:GameEvent" => AttributeTag::ActiveActor,
    "TAGame.CrowdActor_TA:ModifiedNoise" => AttributeTag::Float,
    "TAGame.CrowdActor_TA:ReplicatedCountDownNumber" => AttributeTag::Int,
    "TAGame.CrowdActor_TA:ReplicatedOneShotSound" => AttributeTag::ActiveActor,
    "TAGame.CrowdActor_TA:ReplicatedRoundCountDownNumber" => AttributeTag::Int,
    "TAGame.CrowdManager_TA:GameEvent" => AttributeTag::ActiveActor,
    "TAGame.CrowdManager_TA:ReplicatedGlobalOneShotSound" => AttributeTag::ActiveActor,
    "TAGame.GameEvent_Soccar_TA:bBallHasBeenHit" => AttributeTag::Boolean,
    "TAGame.GameEvent_Soccar_TA:bClubMatch" => AttributeTag::Boolean,
    "TAGame.GameEvent_Soccar_TA:bMatchEnded" => AttributeTag::Boolean,
    "TAGame.GameEvent_Soccar_TA:bNoContest" => AttributeTag::Boolean,
    "TAGame.GameEvent_Soccar_TA:bOverTime" => AttributeTag::Boolean,
    "TAGame.GameEvent_Soccar_TA:bUnlimitedTime" => AttributeTag::Boolean,
    "TAGame.GameEvent_Soccar_TA:GameTime" => AttributeTag::Int,
    "TAGame.GameEvent_Soccar_TA:GameWinner" => AttributeTag::ActiveActor,
    "TAGame.GameEvent_Soccar_TA:MatchWinner" => AttributeTag::ActiveActor,
    "TAGame.GameEvent_Soccar_TA:MaxScore" => AttributeTag::Int,
    "TAGame.GameEvent_Soccar_TA:MVP" => AttributeTag::ActiveActor,
    "TAGame.GameEvent_Soccar_TA:ReplicatedMusicStinger" => AttributeTag::MusicStinger,
    "TAGame.GameEvent_Soccar_TA:ReplicatedScoredOnTeam" => AttributeTag::Byte,
    "TAGame.GameEvent_Soccar_TA:ReplicatedServerPerformanceState" => AttributeTag::Byte,
    "TAGame.GameEvent_Soccar_TA:ReplicatedStatEvent" => AttributeTag::StatEvent,
    "TAGame.GameEvent_Soccar_TA:RoundNum" => AttributeTag::Int,
    "TAGame.GameEvent_Soccar_TA:SecondsRemaining" => AttributeTag::Int,
    "TAGame.GameEvent_Soccar_TA:SeriesLength" => AttributeTag::Int,
    "TAGame.GameEvent_Soccar_TA:SubRulesArchetype" => AttributeTag::ActiveActor,
    "TAGame.GameEvent_SoccarPrivate_TA:MatchSettings" => AttributeTag::PrivateMatchSettings,
    "TAGame.GameEvent_TA:bAllowReadyUp" => AttributeTag::Boolean,
    "TAGame.GameEvent_TA:bCanVoteToForfeit" => AttributeTag::Boolean,
    "TAGame.GameEvent_TA:bHasLeaveMatchPenalty" => AttributeTag::Boolean,
    "TAGame.GameEvent_TA:bIsBotMatch" => AttributeTag::Boolean,
    "TAGame.GameEvent_TA:BotSkill" => AttributeTag::Int,
    "TAGame.GameEvent_TA:GameMode" => AttributeTag::GameMode,
    "TAGame.GameEvent_TA:MatchTypeClass" => AttributeTag::ActiveActor,
    "TAGame.GameEvent_TA:ReplicatedGameStateTimeRemaining" => AttributeTag::Int,
    "TAGame.GameEvent_TA:ReplicatedRoundCountDownNumber" => AttributeTag::Int,
    "TAGame.GameEvent_TA:ReplicatedStateName" => AttributeTag::Int,
    "TAGame.GameEvent_Team_TA:bForfeit" => AttributeTag::Boolean,
    "TAGame.GameEvent_Team_TA:MaxTeamSize" => AttributeTag::Int,
    "TAGame.GRI_TA:NewDedicatedServerIP" => AttributeTag::String,
    "TAGame.PRI_TA:bIsDistracted" => AttributeTag::Boolean,
    "TAGame.PRI_TA:bIsInSplitScreen" => AttributeTag::Boolean,
    "TAGame.PRI_TA:bMatchAdmin" => AttributeTag::Boolean,
    "TAGame.PRI_TA:bMatchMVP" => AttributeTag::Boolean,
    "TAGame.PRI_TA:bOnlineLoadoutSet" => AttributeTag::Boolean,
    "TAGame.PRI_TA:bOnlineLoadoutsSet" => AttributeTag::Boolean,
    "TAGame.PRI_TA:BotProductName" => AttributeTag::Int,
    "TAGame.PRI_TA:bReady" => AttributeTag::Boolean,
    "TAGame.PRI_TA:bUsingBehindView" => AttributeTag::Boolean,
    "TAGame.PRI_TA:bUsingFreecam" => AttributeTag::Boolean,
    "TAGame.PRI_TA:bUsingItems" => AttributeTag::Boolean,
    "TAGame.PRI_TA:bUsingSecondaryCamera" => AttributeTag::Boolean,
    "TAGame.PRI_TA:bVoteToForfeitDisabled" => AttributeTag::Boolean,
    "TAGame.PRI_TA:CameraPitch" => AttributeTag::Byte,
    "TAGame.PRI_TA:CameraSettings" => AttributeTag::CamSettings,
    "TAGame.PRI_TA:CameraYaw" => AttributeTag::Byte,
    "TAGame.PRI_TA:ClientLoadout" => AttributeTag::Loadout,
    "TAGame.PRI_TA:ClientLoadoutOnline" => AttributeTag::LoadoutOnline,
    "TAGame.PRI_TA:ClientLoadouts" => AttributeTag::TeamLoadout,
    "TAGame.PRI_TA:ClientLoadoutsOnline" => AttributeTag::LoadoutsOnline,
    "TAGame.PRI_TA:ClubID" => AttributeTag::Int64,
    "TAGame.PRI_TA:CurrentVoiceRoom" => AttributeTag::String,
    "TAGame.PRI_TA:MatchAssists" => AttributeTag::Int,
    "TAGame.PRI_TA:MatchBreakoutDamage" => AttributeTag::Int,
    "TAGame.PRI_TA:MatchGoals" => AttributeTag::Int,
    "TAGame.PRI_TA:MatchSaves" => AttributeTag::Int,
    "TAGame.PRI_TA:MatchScore" => AttributeTag::Int,
    "TAGame.PRI_TA:MatchShots" => AttributeTag::Int,
    "TAGame.PRI_TA:MaxTimeTillItem" => AttributeTag::Int,
    "TAGame.PRI_TA:PartyLeader" => AttributeTag::PartyLeader,
    "TAGame.PRI_TA:PawnType" => AttributeTag::Byte,
    "TAGame.PRI_TA:PersistentCamera" => AttributeTag::ActiveActor,
    "TAGame.PRI_TA:PlayerHistoryKey" => AttributeTag::PlayerHistoryKey,
    "TAGame.PRI_TA:PlayerHistoryValid" => AttributeTag::Boolean,
    "TAGame.PRI_TA:PrimaryTitle" => AttributeTag::Title,
    "TAGame.PRI_TA:ReplicatedGameEvent" => AttributeTag::ActiveActor,
    "TAGame.PRI_TA:ReplicatedWorstNetQualityBeyondLatency" => AttributeTag::Byte,
    "TAGame.PRI_TA:RepStatTitles" => AttributeTag::RepStatTitle,
    "TAGame.PRI_TA:SecondaryTitle" => AttributeTag::Title,
    "TAGame.PRI_TA:SkillTier" => AttributeTag::FlaggedInt,
    "TAGame.PRI_TA:SpectatorShortcut" => AttributeTag::Int,
    "TAGame.PRI_TA:SteeringSensitivity" => AttributeTag::Float,
    "TAGame.PRI_TA:TimeTillItem" => AttributeTag::Int,
    "TAGame.PRI_TA:Title" => AttributeTag::Int,
    "TAGame.PRI_TA:TotalXP" => AttributeTag::Int,
    "TAGame.RBActor_TA:bFrozen" => AttributeTag::Boolean,
    "TAGame.RBActor_TA:bIgnoreSyncing" => AttributeTag::Boolean,
    "TAGame.RBActor_TA:bReplayActor" => AttributeTag::Boolean,
    "TAGame.RBActor_TA:ReplicatedRBState" => AttributeTag::RigidBody,
    "TAGame.RBActor_TA:WeldedInfo" => AttributeTag::Welded,
    "TAGame.SpecialPickup_BallVelcro_TA:AttachTime" => AttributeTag::Float,
    "TAGame.SpecialPickup_BallVelcro_TA:bBroken" => AttributeTag::Boolean,
    "TAGame.SpecialPickup_BallVelcro_TA:bHit" => AttributeTag::Boolean,
    "TAGame.SpecialPickup_BallVelcro_TA:BreakTime" => AttributeTag::Float,
    "TAGame.SpecialPickup_Targeted_TA:Targeted" => AttributeTag::ActiveActor,
    "TAGame.Team_Soccar_TA:GameScore" => AttributeTag::Int,
    "TAGame.Team_TA:ClubColors" => AttributeTag::ClubColors,
    "TAGame.Team_TA:ClubID" => AttributeTag::Int64,
    "TAGame.Team_TA:CustomTeamName" => AttributeTag::String,
    "TAGame.Team_TA:GameEvent" => AttributeTag::ActiveActor,
    "TAGame.Team_TA:LogoData" => AttributeTag::ActiveActor,
    "TAGame.Vehicle_TA:bDriving" => AttributeTag::Boolean,
    "TAGame.Vehicle_TA:bPodiumMode" => AttributeTag::Boolean,
    "TAGame.Vehicle_TA:bReplicatedHandbrake" => AttributeTag::Boolean,
    "TAGame.Vehicle_TA:ReplicatedSteer" => AttributeTag::Byte,
    "TAGame.Vehicle_TA:ReplicatedThrottle" => AttributeTag::Byte,
    "TAGame.VehiclePickup_TA:bNoPickup" => AttributeTag::Boolean,
    "TAGame.VehiclePickup_TA:NewReplicatedPickupData" => AttributeTag::PickupNew,
    "TAGame.VehiclePickup_TA:ReplicatedPickupData" => AttributeTag::Pickup,
};
