//! Built-in Unity message catalog.

/// Unity `MonoBehaviour` messages the engine invokes by name: (name, description).
pub(crate) const UNITY_MESSAGES: &[(&str, &str)] = &[
    ("Awake", "Called when the script instance is being loaded."),
    ("FixedUpdate", "Frame-rate independent update for physics calculations."),
    ("LateUpdate", "Called every frame after all Update functions have been called."),
    ("OnAnimatorIK", "Callback for setting up animation IK (inverse kinematics)."),
    ("OnAnimatorMove", "Callback for processing animation movements for modifying root motion."),
    ("OnApplicationFocus", "Sent to all GameObjects when the player gets or loses focus."),
    ("OnApplicationPause", "Sent to all GameObjects when the application pauses."),
    ("OnApplicationQuit", "Sent to all GameObjects before the application quits."),
    ("OnAudioFilterRead", "Lets you implement a custom audio filter."),
    ("OnBecameInvisible", "Called when the renderer is no longer visible by any camera."),
    ("OnBecameVisible", "Called when the renderer became visible by any camera."),
    ("OnCollisionEnter", "Called when this collider/rigidbody has begun touching another rigidbody/collider."),
    ("OnCollisionEnter2D", "Sent when an incoming collider makes contact with this object's collider (2D physics only)."),
    ("OnCollisionExit", "Called when this collider/rigidbody has stopped touching another rigidbody/collider."),
    ("OnCollisionExit2D", "Sent when a collider on another object stops touching this object's collider (2D physics only)."),
    ("OnCollisionStay", "Called once per frame for every collider/rigidbody that is touching rigidbody/collider."),
    ("OnCollisionStay2D", "Sent each frame where a collider on another object is touching this object's collider (2D physics only)."),
    ("OnConnectedToServer", "Called on the client when you have successfully connected to a server."),
    ("OnControllerColliderHit", "Called when the controller hits a collider while performing a Move."),
    ("OnDestroy", "Called when the MonoBehaviour will be destroyed."),
    ("OnDisable", "Called when the behaviour becomes disabled."),
    ("OnDisconnectedFromServer", "Called on the client when the connection was lost or you disconnected from the server."),
    ("OnDrawGizmos", "Implement to draw gizmos that are also pickable and always drawn."),
    ("OnDrawGizmosSelected", "Implement to draw gizmos if the object is selected."),
    ("OnEnable", "Called when the object becomes enabled and active."),
    ("OnFailedToConnect", "Called on the client when a connection attempt fails for some reason."),
    ("OnFailedToConnectToMasterServer", "Called on clients or servers when there is a problem connecting to the MasterServer."),
    ("OnGUI", "Called for rendering and handling GUI events."),
    ("OnJointBreak", "Called when a joint attached to the same game object broke."),
    ("OnJointBreak2D", "Called when a Joint2D attached to the same game object breaks."),
    ("OnMasterServerEvent", "Called on clients or servers when reporting events from the MasterServer."),
    ("OnMouseDown", "Called when the user has pressed the mouse button while over the collider."),
    ("OnMouseDrag", "Called when the user has clicked on a collider and is still holding down the mouse."),
    ("OnMouseEnter", "Called when the mouse enters the collider."),
    ("OnMouseExit", "Called when the mouse is not any longer over the collider."),
    ("OnMouseOver", "Called every frame while the mouse is over the collider."),
    ("OnMouseUp", "Called when the user has released the mouse button."),
    ("OnMouseUpAsButton", "Called only when the mouse is released over the same collider as it was pressed."),
    ("OnNetworkInstantiate", "Called on objects which have been network instantiated with Network.Instantiate."),
    ("OnParticleCollision", "Called when a particle hits a collider."),
    ("OnParticleSystemStopped", "Called when all particles in the system have died and no new ones will be born."),
    ("OnParticleTrigger", "Called when any particles in a particle system meet the conditions in the trigger module."),
    ("OnPlayerConnected", "Called on the server whenever a new player has successfully connected."),
    ("OnPlayerDisconnected", "Called on the server whenever a player disconnected from the server."),
    ("OnPostRender", "Called after a camera finished rendering the scene."),
    ("OnPreCull", "Called before a camera culls the scene."),
    ("OnPreRender", "Called before a camera starts rendering the scene."),
    ("OnRenderImage", "Called after all rendering is complete to render image."),
    ("OnRenderObject", "Called after camera has rendered the scene."),
    ("OnSerializeNetworkView", "Used to customize synchronization of variables in a script watched by a network view."),
    ("OnServerInitialized", "Called on the server whenever a Network.InitializeServer was invoked and has completed."),
    ("OnTransformChildrenChanged", "Called when the list of children of the transform of the GameObject has changed."),
    ("OnTransformParentChanged", "Called when the parent property of the transform of the GameObject has changed."),
    ("OnTriggerEnter", "Called when the Collider other enters the trigger."),
    ("OnTriggerEnter2D", "Sent when another object enters a trigger collider attached to this object (2D physics only)."),
    ("OnTriggerExit", "Called when the Collider other has stopped touching the trigger."),
    ("OnTriggerExit2D", "Sent when another object leaves a trigger collider attached to this object (2D physics only)."),
    ("OnTriggerStay", "Called once per physics update for every Collider other that is touching the trigger."),
    ("OnTriggerStay2D", "Sent each frame where another object is within a trigger collider attached to this object (2D physics only)."),
    ("OnValidate", "Called when the script is loaded or a value is changed in the Inspector (editor only)."),
    ("OnWillRenderObject", "Called for each camera if the object is visible and not a UI element."),
    ("Reset", "Reset to default values (editor only)."),
    ("Start", "Called on the frame when a script is enabled just before any Update method is called the first time."),
    ("Update", "Called every frame, if the MonoBehaviour is enabled."),
];
